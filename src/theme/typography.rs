//! Typography - Font Sizes

/// Typography constants
pub struct Typography;

impl Typography {
    pub const TEXT_XS: f32 = 12.0;
    pub const TEXT_SM: f32 = 14.0;
    pub const TEXT_BASE: f32 = 16.0;
    pub const TEXT_XL: f32 = 20.0;
    /// Grand total in the results header
    pub const TEXT_TOTAL: f32 = 28.0;
}
