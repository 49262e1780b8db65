pub const TAG_LEN:    usize = 8;
pub const MAX_EVENTS: usize = 4;

/// Opaque network event metadata tag, all zero when the slot is empty.
pub type Tag = [u8; TAG_LEN];

pub fn all_zero(tag: &Tag) -> bool {
    tag.iter().all(|&b| b == 0)
}

/// True when `tag` is byte-equal to any of the `events`, used to skip
/// duplicate events of a flow seen at several capture points.
pub fn contains(events: &[Tag], tag: &Tag) -> bool {
    events.iter().any(|e| e == tag)
}
