/// Paint layer of a draw item. Higher layers cover lower ones.
///
/// The background artwork records at [`ZIndex::BACKGROUND`], so a host can push
/// its own layers above it into the same list.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const BACKGROUND: ZIndex = ZIndex(-1000);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}

/// Paint order of a draw item: layer first, then recording order.
///
/// Field order matters: the derived `Ord` compares `z` before `order`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}
