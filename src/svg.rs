//! Standalone SVG serialization for a laid-out [`Scene`].
//!
//! Output order follows the scene contract: connection arcs first, node
//! markers second, so lines never occlude markers.

use std::fmt::Write as _;

use crate::layout::{NodeMarker, Scene};

const EDGE_STROKE_WIDTH: f64 = 2.0;
const EDGE_OPACITY: f64 = 0.6;
const NODE_RADIUS: f64 = 32.0;
const GRADIENT_FROM: &str = "#a855f7";
const GRADIENT_TO: &str = "#3b82f6";

/// Serialize a scene to a standalone SVG document.
pub fn render_scene(scene: &Scene) -> String {
    let mut out = String::new();
    let w = scene.viewport.width;
    let h = scene.viewport.height;

    // Writing to a String cannot fail; unwraps below are on fmt::Write.
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#
    )
    .unwrap();
    writeln!(out, "  <defs>").unwrap();
    writeln!(
        out,
        r#"    <linearGradient id="edge" x1="0%" y1="0%" x2="100%" y2="100%">"#
    )
    .unwrap();
    writeln!(out, r#"      <stop offset="0%" stop-color="{GRADIENT_FROM}"/>"#).unwrap();
    writeln!(out, r#"      <stop offset="100%" stop-color="{GRADIENT_TO}"/>"#).unwrap();
    writeln!(out, "    </linearGradient>").unwrap();
    writeln!(out, "  </defs>").unwrap();

    for edge in &scene.edges {
        writeln!(
            out,
            r#"  <path d="M {} {} Q {} {} {} {}" stroke="url(#edge)" stroke-width="{EDGE_STROKE_WIDTH}" opacity="{EDGE_OPACITY}" fill="none"/>"#,
            edge.p0.x, edge.p0.y, edge.ctrl.x, edge.ctrl.y, edge.p1.x, edge.p1.y,
        )
        .unwrap();
    }

    for node in &scene.nodes {
        write_node(&mut out, node);
    }

    out.push_str("</svg>\n");
    out
}

fn write_node(out: &mut String, node: &NodeMarker) {
    let cx = node.center.x;
    let cy = node.center.y;

    writeln!(out, r#"  <g data-skill="{}">"#, escape_xml(&node.skill_id)).unwrap();
    writeln!(
        out,
        "    <title>{} ({}%): {}</title>",
        escape_xml(&node.name),
        node.level,
        escape_xml(&node.description),
    )
    .unwrap();
    writeln!(
        out,
        r##"    <circle cx="{cx}" cy="{cy}" r="{NODE_RADIUS}" fill="#111827" stroke="{GRADIENT_FROM}"/>"##
    )
    .unwrap();
    writeln!(
        out,
        r#"    <text x="{cx}" y="{cy}" text-anchor="middle" dominant-baseline="central" font-size="24">{}</text>"#,
        escape_xml(&node.icon),
    )
    .unwrap();
    writeln!(
        out,
        r##"    <text x="{cx}" y="{}" text-anchor="middle" font-size="12" fill="#ffffff">{}</text>"##,
        cy + NODE_RADIUS + 14.0,
        escape_xml(&node.name),
    )
    .unwrap();
    writeln!(out, "  </g>").unwrap();
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
