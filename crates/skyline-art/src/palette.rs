//! Shared artwork colors as `0xRRGGBB` literals.
//!
//! Convert with [`Color::hex`](skyline_engine::paint::Color::hex) at the draw site.

pub const GROUND: u32 = 0x9ba88a;
pub const SPECKLE_DARK: u32 = 0x5d6b4f;
pub const SPECKLE_LIGHT: u32 = 0xd8dcc6;

pub const SHADOW: u32 = 0x1e2418;

pub const GLASS: u32 = 0x34506b;
pub const GLASS_LIT: u32 = 0xf0d37a;
pub const WINDOW_FRAME: u32 = 0xede6d6;

pub const STONE: u32 = 0xb9b1a0;
pub const STONE_DARK: u32 = 0x8c8475;
pub const SLATE: u32 = 0x4f5560;
pub const WOOD: u32 = 0x6b4326;
pub const WOOD_DARK: u32 = 0x3f2716;
pub const IRON: u32 = 0x2f3338;
pub const STEEL: u32 = 0x7d858c;
pub const GOLD: u32 = 0xd9aa3a;
pub const WHITE: u32 = 0xf4f4f0;

pub const SIGNAL_RED: u32 = 0xd8352a;
pub const SIGNAL_AMBER: u32 = 0xf0a323;
pub const SIGNAL_GREEN: u32 = 0x3cb85a;
pub const SIGN_BLUE: u32 = 0x2763b0;

pub const FOLIAGE: u32 = 0x4d7f3a;
pub const FOLIAGE_LIGHT: u32 = 0x8cbf5e;
pub const BARK: u32 = 0x6a4a2c;

/// Facade colors shared by row houses and border buildings.
pub const FACADES: [u32; 6] = [0xb5653a, 0x8e4a32, 0xc9a46c, 0xd7c3a0, 0x7e8c99, 0xa35d5d];

/// Flower colors for window boxes and patches.
pub const FLOWERS: [u32; 4] = [0xe0475b, 0xf3c843, 0xf7f2ea, 0xb46ad1];
