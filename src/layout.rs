use crate::{
    core::{Canvas, Point, QuadBez, Viewport},
    error::SkillGraphResult,
    model::{Skill, SkillSet},
};

/// Vertical offset applied to every connection arc's control point, in logical
/// canvas units. Pulling the midpoint up turns clustered connections into
/// distinguishable arcs instead of overlapping straight lines.
pub const ARC_BIAS: f64 = -50.0;

/// Resolved geometry for one skill set at one viewport size. Edges precede
/// nodes so consumers that draw in order never occlude markers with lines.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Scene {
    pub viewport: Viewport,
    pub edges: Vec<EdgeArc>,
    pub nodes: Vec<NodeMarker>,
}

/// Circular marker for one skill, positioned in viewport space.
#[derive(Clone, Debug, serde::Serialize)]
pub struct NodeMarker {
    pub skill_id: String,
    pub name: String,
    pub icon: String,
    pub level: u8,
    pub description: String,
    /// Normalized placement, `(position.x / W, position.y / H)`.
    pub fraction: Point,
    /// `fraction * viewport`.
    pub center: Point,
}

/// One directed connection rendered as a quadratic Bezier arc. Mirrored
/// declarations (A lists B and B lists A) produce two overlapping arcs; that
/// is accepted behavior, not deduplicated.
#[derive(Clone, Debug, serde::Serialize)]
pub struct EdgeArc {
    pub from_id: String,
    pub to_id: String,
    pub p0: Point,
    pub ctrl: Point,
    pub p1: Point,
}

impl EdgeArc {
    pub fn to_quad(&self) -> QuadBez {
        QuadBez::new(self.p0, self.ctrl, self.p1)
    }
}

/// Map a skill set onto a viewport. Pure: the same inputs always produce the
/// same scene, and no render state persists between calls.
#[tracing::instrument(skip(set), fields(member = %set.member.id))]
pub fn layout(set: &SkillSet, viewport: Viewport) -> SkillGraphResult<Scene> {
    set.validate()?;
    viewport.validate()?;

    let mut edges = Vec::new();
    for skill in &set.skills {
        for conn in &skill.connections {
            let Some(other) = set.skill(conn) else {
                // Data-quality issue, not a render failure: drop exactly this edge.
                tracing::debug!(from = %skill.id, to = %conn, "skipping edge with missing endpoint");
                continue;
            };
            edges.push(arc_between(skill, other, set.canvas, viewport));
        }
    }

    let nodes = set
        .skills
        .iter()
        .map(|skill| {
            let fraction = set.canvas.fraction_of(skill.position);
            NodeMarker {
                skill_id: skill.id.clone(),
                name: skill.name.clone(),
                icon: skill.icon.clone(),
                level: skill.level,
                description: skill.description.clone(),
                fraction,
                center: viewport.project(fraction),
            }
        })
        .collect();

    Ok(Scene {
        viewport,
        edges,
        nodes,
    })
}

fn arc_between(from: &Skill, to: &Skill, canvas: Canvas, viewport: Viewport) -> EdgeArc {
    let mid = Point::new(
        (from.position.x + to.position.x) / 2.0,
        (from.position.y + to.position.y) / 2.0 + ARC_BIAS,
    );

    let project = |p: Point| viewport.project(canvas.fraction_of(p));

    EdgeArc {
        from_id: from.id.clone(),
        to_id: to.id.clone(),
        p0: project(from.position),
        ctrl: project(mid),
        p1: project(to.position),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Member, Skill};

    fn skill(id: &str, x: f64, y: f64, connections: &[&str]) -> Skill {
        Skill {
            id: id.to_string(),
            name: id.to_uppercase(),
            icon: "*".to_string(),
            level: 50,
            description: format!("about {id}"),
            position: Point::new(x, y),
            connections: connections.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn set_with(skills: Vec<Skill>) -> SkillSet {
        SkillSet {
            member: Member {
                id: "m".to_string(),
                name: "M".to_string(),
                role: "r".to_string(),
                image: "@".to_string(),
            },
            canvas: Canvas {
                width: 800.0,
                height: 400.0,
            },
            skills,
        }
    }

    #[test]
    fn two_skill_example_yields_one_curve_two_markers() {
        let set = set_with(vec![
            skill("a", 100.0, 100.0, &["b"]),
            skill("b", 300.0, 100.0, &[]),
        ]);
        let scene = layout(&set, Viewport::new(800.0, 400.0).unwrap()).unwrap();
        assert_eq!(scene.edges.len(), 1);
        assert_eq!(scene.nodes.len(), 2);
        assert_eq!(scene.edges[0].from_id, "a");
        assert_eq!(scene.edges[0].to_id, "b");
    }

    #[test]
    fn missing_endpoint_skips_exactly_that_edge() {
        let set = set_with(vec![
            skill("a", 100.0, 100.0, &["b", "zzz", "c"]),
            skill("b", 300.0, 100.0, &[]),
            skill("c", 500.0, 200.0, &[]),
        ]);
        let scene = layout(&set, Viewport::new(800.0, 400.0).unwrap()).unwrap();
        assert_eq!(scene.edges.len(), 2);
        assert!(scene.edges.iter().all(|e| e.to_id != "zzz"));
    }

    #[test]
    fn mirrored_connections_are_not_deduplicated() {
        let set = set_with(vec![
            skill("a", 100.0, 100.0, &["b"]),
            skill("b", 300.0, 100.0, &["a"]),
        ]);
        let scene = layout(&set, Viewport::new(800.0, 400.0).unwrap()).unwrap();
        assert_eq!(scene.edges.len(), 2);
    }

    #[test]
    fn arc_control_point_sits_above_the_midpoint() {
        let set = set_with(vec![
            skill("a", 100.0, 100.0, &["b"]),
            skill("b", 300.0, 100.0, &[]),
        ]);
        // Viewport matches canvas, so projection is the identity.
        let scene = layout(&set, Viewport::new(800.0, 400.0).unwrap()).unwrap();
        let e = &scene.edges[0];
        assert_eq!(e.ctrl, Point::new(200.0, 100.0 + ARC_BIAS));
        assert_eq!(e.to_quad().p1, e.ctrl);
    }

    #[test]
    fn fractions_are_invariant_under_uniform_rescale() {
        let set = set_with(vec![
            skill("a", 100.0, 100.0, &["b"]),
            skill("b", 300.0, 100.0, &[]),
        ]);
        let small = layout(&set, Viewport::new(800.0, 400.0).unwrap()).unwrap();
        let large = layout(&set, Viewport::new(1600.0, 800.0).unwrap()).unwrap();
        for (s, l) in small.nodes.iter().zip(large.nodes.iter()) {
            assert_eq!(s.fraction, l.fraction);
            assert_eq!(l.center, Point::new(s.center.x * 2.0, s.center.y * 2.0));
        }
    }

    #[test]
    fn layout_is_deterministic() {
        let set = set_with(vec![
            skill("a", 100.0, 100.0, &["b"]),
            skill("b", 300.0, 100.0, &["a"]),
        ]);
        let vp = Viewport::new(640.0, 480.0).unwrap();
        let s1 = serde_json::to_string(&layout(&set, vp).unwrap()).unwrap();
        let s2 = serde_json::to_string(&layout(&set, vp).unwrap()).unwrap();
        assert_eq!(s1, s2);
    }

    #[test]
    fn layout_rejects_invalid_viewport() {
        let set = set_with(vec![skill("a", 100.0, 100.0, &[])]);
        let err = layout(&set, Viewport { width: 0.0, height: 10.0 }).unwrap_err();
        assert!(matches!(err, crate::error::SkillGraphError::Layout(_)));
    }
}
