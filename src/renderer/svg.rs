//! SVG generation for rendered links
//!
//! Turns an [`ArrowScene`] into a self-contained `<g>` fragment a host
//! document can embed. Layers follow the scene's draw order: fill, then
//! the selection border, then the hover highlight on top.

use crate::interaction::ArrowScene;

use super::SvgConfig;

/// Build the SVG fragment for one link scene.
pub fn render_link_fragment(scene: &ArrowScene, config: &SvgConfig) -> String {
    LinkSvgBuilder::new(config).build(scene)
}

/// Build SVG layers for a link incrementally
struct LinkSvgBuilder<'a> {
    config: &'a SvgConfig,
    layers: Vec<String>,
}

impl<'a> LinkSvgBuilder<'a> {
    fn new(config: &'a SvgConfig) -> Self {
        Self {
            config,
            layers: vec![],
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn add_fill(&mut self, d: &str, color: &str) {
        let prefix = self.prefix();
        self.layers.push(format!(
            r#"<path class="{prefix}arrow" d="{d}" fill="{color}"/>"#
        ));
    }

    fn add_border(&mut self, d: &str, color: &str) {
        let prefix = self.prefix();
        let width = self.config.border_width;
        self.layers.push(format!(
            r#"<path class="{prefix}border" d="{d}" fill="none" stroke="{color}" stroke-width="{width}"/>"#
        ));
    }

    fn add_hover(&mut self, d: &str, color: &str) {
        let prefix = self.prefix();
        let opacity = self.config.hover_opacity;
        self.layers.push(format!(
            r#"<path class="{prefix}hover" d="{d}" fill="{color}" opacity="{opacity}"/>"#
        ));
    }

    fn build(mut self, scene: &ArrowScene) -> String {
        let d = scene.path.to_svg_d();

        self.add_fill(&d, &scene.fill);
        if let Some(border) = &scene.border {
            self.add_border(&d, border);
        }
        if let Some(hover) = &scene.hover {
            self.add_hover(&d, hover);
        }

        let prefix = self.prefix();
        let mut svg = format!(
            r#"<g class="{prefix}link" transform="translate({} {})">"#,
            scene.origin.x, scene.origin.y
        );
        for layer in &self.layers {
            svg.push_str(self.newline());
            svg.push_str(self.indent());
            svg.push_str(layer);
        }
        svg.push_str(self.newline());
        svg.push_str("</g>");
        svg
    }
}
