use mdf42adx::{
    AcquisitionSource, BusType, ChannelGroup, DecodedFile, Group, Record, Result, Samples, Signal,
    Source, SourceType, extract_source, split_by_type,
};

fn main() -> Result<()> {
    // 1) A decoded file with two groups: a CAN logger and an analog I/O box
    let file = DecodedFile::new(vec![
        Group::new(
            ChannelGroup::named("CAN1")
                .with_acq_source(AcquisitionSource::new("VN1630", "Vector/CAN1")),
        ),
        Group::new(ChannelGroup::named("Analog")),
    ]);

    // 2) Signals as a decoder would hand them over
    let signals = vec![
        Signal::new(vec![0.0, 0.1, 0.2], Samples::UInt16(vec![800, 1500, 2300]))?
            .with_name("EngineSpeed")
            .with_source(Source::can_ecu("Engine")),
        Signal::new(vec![0.0, 0.5], Samples::Float32(vec![12.6, 12.4]))?
            .with_name("BatteryVoltage")
            .with_group_index(1)
            .with_source(Source::new("IOBox", SourceType::IO, BusType::None)),
        Signal::new(
            vec![0.0],
            Samples::Record(vec![
                Record::new()
                    .with_field("ID", 0x1a0u64)
                    .with_field("DLC", 2u64),
            ]),
        )?
        .with_name("CAN_DataFrame"),
    ];

    // 3) Print each signal as ADX rows
    for signal in &signals {
        let meta = extract_source(&file, signal)?;
        let columns = split_by_type(signal);

        println!("Signal: {}", signal.name().unwrap_or("<unnamed>"));
        println!(
            "  source={} type={} bus={} group={} acq_source={} path={}",
            meta.source_name,
            meta.source_type,
            meta.bus_type,
            meta.channel_group_acq_name,
            meta.acq_source_name,
            meta.acq_source_path
        );
        println!("  kind={:?}", columns.kind);
        for (i, t) in signal.timestamps().iter().enumerate() {
            println!(
                "  {t:>6.3} float={} integer={} decimal={} string={:?}",
                columns.float[i], columns.integer[i], columns.decimal[i], columns.string[i]
            );
        }
        println!();
    }

    Ok(())
}
