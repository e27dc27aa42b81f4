use alloc::vec::Vec;

use crate::channel_group::ChannelGroup;

/// One data group of a decoded file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    /// The channel group holding this group's acquisition metadata, if decoded
    pub channel_group: Option<ChannelGroup>,
}

impl Group {
    pub fn new(channel_group: ChannelGroup) -> Self {
        Self {
            channel_group: Some(channel_group),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// High level view of a decoded MDF file.
///
/// Groups are stored in file order; a signal refers to its group by index
/// (see [`crate::Signal::group_index`]).
pub struct DecodedFile {
    pub groups: Vec<Group>,
}

impl DecodedFile {
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    /// Look up a group by index. Out of range indices yield `None`.
    pub fn group(&self, index: usize) -> Option<&Group> {
        self.groups.get(index)
    }

    /// Channel group of the group at `index`, if both exist.
    pub fn channel_group(&self, index: usize) -> Option<&ChannelGroup> {
        self.group(index)?.channel_group.as_ref()
    }
}

impl FromIterator<Group> for DecodedFile {
    fn from_iter<I: IntoIterator<Item = Group>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
