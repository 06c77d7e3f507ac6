//! Decorative background animation as a pure `time -> transform` sampling.
//!
//! Each mesh channel is an elementary function of elapsed seconds with no
//! cross-frame memory; callers sample once per rendered frame.

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct SineChannel {
    pub amp: f64,
    pub rate: f64, // radians per second fed to sin
    pub phase: f64,
    pub offset: f64,
}

impl SineChannel {
    pub const fn new(amp: f64, rate: f64) -> Self {
        Self {
            amp,
            rate,
            phase: 0.0,
            offset: 0.0,
        }
    }

    pub fn sample(self, t: f64) -> f64 {
        (t * self.rate + self.phase).sin() * self.amp + self.offset
    }
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub enum Channel {
    Constant(f64),
    Sine(SineChannel),
    /// Unbounded rotation, `rate * t`.
    Spin { rate: f64 },
}

impl Channel {
    pub fn sample(self, t: f64) -> f64 {
        match self {
            Self::Constant(v) => v,
            Self::Sine(s) => s.sample(t),
            Self::Spin { rate } => rate * t,
        }
    }
}

/// Sampled pose of one mesh: position and Euler rotation, both xyz.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MeshPose {
    pub position: [f64; 3],
    pub rotation: [f64; 3],
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct MeshRig {
    pub name: String,
    pub position: [Channel; 3],
    pub rotation: [Channel; 3],
}

impl MeshRig {
    pub fn sample(&self, t: f64) -> MeshPose {
        MeshPose {
            position: self.position.map(|c| c.sample(t)),
            rotation: self.rotation.map(|c| c.sample(t)),
        }
    }
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct BackgroundRig {
    pub meshes: Vec<MeshRig>,
}

impl BackgroundRig {
    pub fn sample(&self, t: f64) -> Vec<MeshPose> {
        self.meshes.iter().map(|m| m.sample(t)).collect()
    }

    /// The stock background: a bobbing cube, a slowly tilting particle field
    /// and three drifting spheres.
    pub fn showcase() -> Self {
        const ZERO: Channel = Channel::Constant(0.0);

        Self {
            meshes: vec![
                MeshRig {
                    name: "cube".to_string(),
                    position: [ZERO, Channel::Sine(SineChannel::new(0.5, 0.8)), ZERO],
                    rotation: [
                        Channel::Sine(SineChannel::new(0.2, 0.5)),
                        Channel::Sine(SineChannel::new(0.2, 0.3)),
                        ZERO,
                    ],
                },
                MeshRig {
                    name: "particles".to_string(),
                    position: [ZERO, ZERO, ZERO],
                    rotation: [
                        Channel::Sine(SineChannel::new(0.1, 0.1)),
                        Channel::Sine(SineChannel::new(0.1, 0.15)),
                        ZERO,
                    ],
                },
                MeshRig {
                    name: "sphere-1".to_string(),
                    position: [
                        Channel::Sine(SineChannel::new(3.0, 0.3)),
                        Channel::Sine(SineChannel::new(2.0, 0.5)),
                        Channel::Constant(-2.0),
                    ],
                    rotation: [
                        Channel::Spin { rate: 0.2 },
                        Channel::Spin { rate: 0.3 },
                        ZERO,
                    ],
                },
                MeshRig {
                    name: "sphere-2".to_string(),
                    position: [
                        Channel::Sine(SineChannel::new(-2.5, 0.4)),
                        Channel::Sine(SineChannel::new(1.5, 0.6)),
                        Channel::Constant(-1.0),
                    ],
                    rotation: [
                        Channel::Spin { rate: -0.15 },
                        Channel::Spin { rate: -0.25 },
                        ZERO,
                    ],
                },
                MeshRig {
                    name: "sphere-3".to_string(),
                    position: [
                        Channel::Sine(SineChannel::new(1.5, 0.2)),
                        Channel::Sine(SineChannel::new(-2.0, 0.7)),
                        Channel::Constant(-3.0),
                    ],
                    rotation: [
                        Channel::Spin { rate: 0.1 },
                        Channel::Spin { rate: 0.2 },
                        ZERO,
                    ],
                },
            ],
        }
    }
}
