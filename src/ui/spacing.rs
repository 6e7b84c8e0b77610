pub const SPACING_XS: f32 = 4.0;
pub const SPACING_SM: f32 = 8.0;
pub const SPACING_MD: f32 = 12.0;
pub const SPACING_LG: f32 = 20.0;

/// Width of every single-line text field.
pub const FIELD_WIDTH: f32 = 300.0;
/// Height of the scrollable records table.
pub const TABLE_HEIGHT: f32 = 400.0;
