#![forbid(unsafe_code)]

pub mod core;
pub mod error;
pub mod fetch;
pub mod focus;
pub mod layout;
pub mod modal;
pub mod model;
pub mod motion;
pub mod pointer;
pub mod svg;

pub use core::{Canvas, Point, Viewport};
pub use error::{SkillGraphError, SkillGraphResult};
pub use fetch::{FsSkillSetSource, SkillSetSource};
pub use focus::{FocusState, FocusTracker, OverlayPlacement};
pub use layout::{ARC_BIAS, EdgeArc, NodeMarker, Scene, layout};
pub use modal::{FetchTicket, ModalController, OpenModal, ScrollFlag, ScrollGuard, ScrollHost};
pub use model::{Member, Skill, SkillSet};
pub use motion::{BackgroundRig, Channel, MeshPose, MeshRig, SineChannel};
pub use pointer::{PointerHub, PointerSubscription};
pub use svg::render_scene;
