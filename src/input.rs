//! Pointer input mapping
//!
//! Browser events report client (CSS pixel) coordinates. The simulation
//! wants the top edge of the player paddle in playfield pixels, with the
//! paddle centered on the pointer.

/// Ratio of playfield pixels to displayed CSS pixels along one axis.
///
/// Falls back to 1.0 while the surface has no layout size (hidden canvas).
pub fn surface_scale(field_extent: f32, displayed_extent: f32) -> f32 {
    if displayed_extent > 0.0 && displayed_extent.is_finite() {
        field_extent / displayed_extent
    } else {
        1.0
    }
}

/// Convert a pointer's client y into a player paddle target.
///
/// `surface_top` is the surface's top edge in client coordinates. The result
/// is not clamped; the simulation clamps when it stores the target.
pub fn pointer_to_target_y(client_y: f32, surface_top: f32, scale: f32, paddle_height: f32) -> f32 {
    (client_y - surface_top) * scale - paddle_height / 2.0
}
