use mdf42adx::{
    AcquisitionSource, BusType, ChannelGroup, DecodedFile, Error, Group, Result, Samples, Signal,
    Source, SourceType, extract_source,
};

fn signal_in_group(group_index: usize) -> Result<Signal> {
    Ok(Signal::new(vec![0.0, 1.0], Samples::Float64(vec![0.5, 1.5]))?.with_group_index(group_index))
}

fn full_file() -> DecodedFile {
    DecodedFile::new(vec![
        Group::new(ChannelGroup::named("Powertrain")),
        Group::new(
            ChannelGroup::named("CAN1")
                .with_acq_source(AcquisitionSource::new("VN1630", "Vector/CAN1")),
        ),
    ])
}

#[test]
fn signal_without_source_reports_unknown() -> Result<()> {
    let file = full_file();
    for index in 0..4 {
        let meta = extract_source(&file, &signal_in_group(index)?)?;
        assert_eq!(meta.source_name, "Unknown");
        assert_eq!(meta.source_type, "Unknown");
        assert_eq!(meta.bus_type, "Unknown");
    }
    Ok(())
}

#[test]
fn source_codes_use_format_names() -> Result<()> {
    let file = full_file();
    let cases = [
        (SourceType::Other, BusType::None, "OTHER", "NONE"),
        (SourceType::ECU, BusType::CAN, "ECU", "CAN"),
        (SourceType::Bus, BusType::LIN, "BUS", "LIN"),
        (SourceType::IO, BusType::FlexRay, "IO", "FLEXRAY"),
        (SourceType::Tool, BusType::MOST, "TOOL", "MOST"),
        (SourceType::User, BusType::Ethernet, "USER", "ETHERNET"),
    ];
    for (source_type, bus_type, st, bt) in cases {
        let signal = signal_in_group(1)?.with_source(Source::new("ECU1", source_type, bus_type));
        let meta = extract_source(&file, &signal)?;
        assert_eq!(meta.source_name, "ECU1");
        assert_eq!(meta.source_type, st);
        assert_eq!(meta.bus_type, bt);
    }
    Ok(())
}

#[test]
fn complete_group_metadata() -> Result<()> {
    let signal = signal_in_group(1)?.with_source(Source::can_bus("CAN1"));
    let (name, st, bt, acq_name, acq_source_name, acq_source_path) =
        extract_source(&full_file(), &signal)?.into_tuple();
    assert_eq!(name, "CAN1");
    assert_eq!(st, "BUS");
    assert_eq!(bt, "CAN");
    assert_eq!(acq_name, "CAN1");
    assert_eq!(acq_source_name, "VN1630");
    assert_eq!(acq_source_path, "Vector/CAN1");
    Ok(())
}

#[test]
fn broken_group_chains_degrade_independently() -> Result<()> {
    let file = DecodedFile::new(vec![
        // no channel group at all
        Group::default(),
        // channel group without acquisition source
        Group::new(ChannelGroup::named("NoSource")),
        // acquisition source with only a path
        Group::new(ChannelGroup {
            acq_name: None,
            acq_source: Some(AcquisitionSource {
                name: None,
                path: Some("bench/io".into()),
            }),
            comment: Some("analog inputs".into()),
        }),
    ]);

    let meta = extract_source(&file, &signal_in_group(0)?)?;
    assert_eq!(meta.channel_group_acq_name, "");
    assert_eq!(meta.acq_source_name, "");
    assert_eq!(meta.acq_source_path, "");

    let meta = extract_source(&file, &signal_in_group(1)?)?;
    assert_eq!(meta.channel_group_acq_name, "NoSource");
    assert_eq!(meta.acq_source_name, "");
    assert_eq!(meta.acq_source_path, "");

    let meta = extract_source(&file, &signal_in_group(2)?)?;
    assert_eq!(meta.channel_group_acq_name, "");
    assert_eq!(meta.acq_source_name, "");
    assert_eq!(meta.acq_source_path, "bench/io");

    // out of range index
    let meta = extract_source(&file, &signal_in_group(usize::MAX)?)?;
    assert_eq!(meta.channel_group_acq_name, "");
    assert_eq!(meta.acq_source_path, "");
    Ok(())
}

#[test]
fn out_of_table_codes_fail() -> Result<()> {
    let file = full_file();

    let signal = signal_in_group(0)?.with_source(Source::from_codes(Some("x".into()), 6, 0));
    assert_eq!(
        extract_source(&file, &signal),
        Err(Error::UnknownSourceType(6))
    );

    let signal = signal_in_group(0)?.with_source(Source::from_codes(Some("x".into()), 0, 42));
    assert_eq!(extract_source(&file, &signal), Err(Error::UnknownBusType(42)));
    Ok(())
}
