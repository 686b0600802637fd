//! Typed components owned by actors.
//!
//! Four component shapes matter to the metrics engine: lights, static meshes,
//! skeletal meshes, and particle systems. Anything else the host engine
//! attaches to an actor is simply not materialized into the scene model.

/// How a light component may move at runtime.
///
/// This is a closed enumeration: the host engine promises every light carries
/// one of these three categories. Raw engine data arrives as a
/// [`MobilityCode`] and is decoded at the metrics boundary so out-of-range
/// values surface as errors instead of being silently dropped.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mobility {
    /// Fully baked; never moves.
    Static,
    /// Baked indirect lighting, dynamic direct lighting.
    Stationary,
    /// Fully dynamic.
    Movable,
}

/// Raw mobility value as supplied by the host engine.
///
/// The scene model carries the untranslated code rather than [`Mobility`]
/// itself so that a data-model mismatch between host and tool (an unknown
/// code) stays representable and can be reported with full context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MobilityCode(pub u8);

impl MobilityCode {
    pub const STATIC: Self = Self(0);
    pub const STATIONARY: Self = Self(1);
    pub const MOVABLE: Self = Self(2);

    /// Decodes the raw code into the closed enumeration.
    ///
    /// Returns `None` for codes outside the documented set.
    pub const fn decode(self) -> Option<Mobility> {
        match self.0 {
            0 => Some(Mobility::Static),
            1 => Some(Mobility::Stationary),
            2 => Some(Mobility::Movable),
            _ => None,
        }
    }
}

impl From<Mobility> for MobilityCode {
    fn from(mobility: Mobility) -> Self {
        match mobility {
            Mobility::Static => Self::STATIC,
            Mobility::Stationary => Self::STATIONARY,
            Mobility::Movable => Self::MOVABLE,
        }
    }
}

/// A light source attached to an actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightComponent {
    /// Raw mobility code from the host engine.
    pub mobility: MobilityCode,
}

impl LightComponent {
    /// Creates a light with a known mobility category.
    pub fn new(mobility: Mobility) -> Self {
        Self {
            mobility: mobility.into(),
        }
    }

    /// Creates a light from an untranslated engine code.
    ///
    /// Use this at the host boundary; codes outside the documented set are
    /// rejected later, during aggregation.
    pub const fn from_raw(code: u8) -> Self {
        Self {
            mobility: MobilityCode(code),
        }
    }
}

/// A mesh attached to an actor. Shared by static and skeletal meshes, which
/// expose the same two measured properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshComponent {
    /// Number of level-of-detail variants. `1` means no LOD variants exist.
    /// Host contract: always at least 1.
    pub lod_count: u32,
    /// Number of material slots on the mesh.
    pub material_count: u32,
}

impl MeshComponent {
    pub const fn new(lod_count: u32, material_count: u32) -> Self {
        Self {
            lod_count,
            material_count,
        }
    }

    /// True when the mesh ships no LOD variants beyond the base mesh.
    pub const fn has_single_lod(&self) -> bool {
        self.lod_count == 1
    }
}

/// The asset a particle system component references, when it references one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticleSystemAsset {
    /// Whether any emitter in the asset runs on the GPU.
    pub has_gpu_emitters: bool,
    /// Number of emitters defined by the asset.
    pub emitter_count: u32,
}

/// A particle system component. Components placed without an asset reference
/// are valid scene data and are counted separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticleSystemComponent {
    pub asset: Option<ParticleSystemAsset>,
}

impl ParticleSystemComponent {
    /// A component referencing an asset with the given characteristics.
    pub const fn with_asset(has_gpu_emitters: bool, emitter_count: u32) -> Self {
        Self {
            asset: Some(ParticleSystemAsset {
                has_gpu_emitters,
                emitter_count,
            }),
        }
    }

    /// A component placed without an asset reference.
    pub const fn without_asset() -> Self {
        Self { asset: None }
    }
}

/// A typed capability attached to an actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Component {
    Light(LightComponent),
    StaticMesh(MeshComponent),
    SkeletalMesh(MeshComponent),
    ParticleSystem(ParticleSystemComponent),
}
