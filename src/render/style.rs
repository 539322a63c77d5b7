//! Overlay stylesheet.

use tracing::warn;

use crate::config::StyleConfig;

/// Build the overlay stylesheet.
///
/// The page fills the viewport and ignores pointer events so clicks reach
/// the player underneath. Each region is fixed to the top edge: `#left`
/// against the left inset, `#center` centered, and `#right` against the
/// right inset with ellipsis truncation past its maximum width.
///
/// A style that fails [`StyleConfig::validate`] is replaced by the default
/// style.
pub fn stylesheet(style: &StyleConfig) -> String {
    if let Err(e) = style.validate() {
        warn!(error = %e, "Invalid overlay style, using defaults");
        return render(&StyleConfig::default());
    }
    render(style)
}

fn render(style: &StyleConfig) -> String {
    format!(
        r#"body {{
    margin: 0;
    padding: 0;
    width: 100vw;
    height: 100vh;
    pointer-events: none;
    overflow: hidden;
    background: transparent;
}}
#osd-container {{
    position: fixed;
    top: 0;
    left: 0;
    width: 100vw;
    height: 100vh;
    pointer-events: none;
}}
.osd-item {{
    position: fixed;
    top: {inset}px;
    font-family: {family};
    font-size: {size}px;
    font-weight: {weight};
    color: {color};
    background-color: {background};
    padding: 6px 12px;
    border-radius: {radius}px;
    text-shadow: 1px 1px 2px black;
    white-space: nowrap;
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 1000;
}}
#left {{
    left: {inset}px;
}}
#center {{
    left: 50%;
    transform: translateX(-50%);
}}
#right {{
    right: {inset}px;
    max-width: {right_width}vw;
    overflow: hidden;
    text-overflow: ellipsis;
    display: block;
}}
"#,
        inset = style.inset_px,
        family = style.font_family,
        size = style.font_size_px,
        weight = style.font_weight,
        color = style.text_color,
        background = style.background_color,
        radius = style.corner_radius_px,
        right_width = style.right_max_width_vw,
    )
}
