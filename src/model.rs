use std::collections::BTreeSet;

use crate::{
    core::{Canvas, Point},
    error::{SkillGraphError, SkillGraphResult},
};

/// One fixture per person: a display identity plus that person's skill graph.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SkillSet {
    pub member: Member,
    pub canvas: Canvas,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub role: String,
    pub image: String, // glyph/emoji reference
}

/// A node in a per-person capability graph.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub level: u8, // proficiency percent, 0..=100
    pub description: String,
    pub position: Point, // in logical canvas units
    #[serde(default)]
    pub connections: Vec<String>, // directional in storage, rendered undirected
}

impl SkillSet {
    pub fn from_json(s: &str) -> SkillGraphResult<Self> {
        let set: Self = serde_json::from_str(s)
            .map_err(|e| SkillGraphError::fixture(format!("parse skill set JSON: {e}")))?;
        Ok(set)
    }

    pub fn skill(&self, id: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    pub fn validate(&self) -> SkillGraphResult<()> {
        self.canvas.validate()?;

        let mut seen = BTreeSet::new();
        for skill in &self.skills {
            if skill.id.trim().is_empty() {
                return Err(SkillGraphError::validation("skill id must be non-empty"));
            }
            if !seen.insert(skill.id.as_str()) {
                return Err(SkillGraphError::validation(format!(
                    "duplicate skill id '{}'",
                    skill.id
                )));
            }
            if skill.level > 100 {
                return Err(SkillGraphError::validation(format!(
                    "skill '{}' level {} exceeds 100",
                    skill.id, skill.level
                )));
            }
            if !skill.position.x.is_finite() || !skill.position.y.is_finite() {
                return Err(SkillGraphError::validation(format!(
                    "skill '{}' position must be finite",
                    skill.id
                )));
            }
            // Connections referencing unknown ids are intentionally tolerated here;
            // the layout pass skips those edges instead of failing the render.
        }

        Ok(())
    }
}
