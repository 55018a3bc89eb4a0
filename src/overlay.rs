use sh_core::{coefficient_to_display, CoefficientEditor, ShCoefficients};

/// Window title text: selected coefficient, its value and frame timing.
pub fn title_text(
    base: &str,
    editor: &CoefficientEditor,
    coefficients: &ShCoefficients,
    edited: bool,
    frame_ms: f32,
    fps: f32,
) -> String {
    let c = coefficients[editor.selected];
    let d = coefficient_to_display(c);
    format!(
        "{} | [{}] {} ({:+.3}, {:+.3}, {:+.3}) display ({:.2}, {:.2}, {:.2}) [{}]{} | {:.3} ms/frame ({:.1} FPS)",
        base,
        editor.selected,
        editor.label(),
        c.x,
        c.y,
        c.z,
        d.x,
        d.y,
        d.z,
        editor.channel.label(),
        if edited { " *" } else { "" },
        frame_ms,
        fps
    )
}
