use glam::Vec3;
use std::cell::Cell;
use std::fmt;

/// The six satellite subsystems shown on the site.
///
/// The same vocabulary keys the 3D markers, the DOM tooltips, the hoverable
/// page cards, and the per-subsystem routes, so hover state carries across
/// the canvas/DOM boundary without translation tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubsystemKey {
    Adcs,
    Eps,
    Obc,
    Ttc,
    Sts,
    Payload,
}

impl SubsystemKey {
    pub const ALL: [SubsystemKey; 6] = [
        SubsystemKey::Adcs,
        SubsystemKey::Eps,
        SubsystemKey::Obc,
        SubsystemKey::Ttc,
        SubsystemKey::Sts,
        SubsystemKey::Payload,
    ];

    /// Short uppercase label used in headings and marker badges.
    pub const fn label(self) -> &'static str {
        match self {
            SubsystemKey::Adcs => "ADCS",
            SubsystemKey::Eps => "EPS",
            SubsystemKey::Obc => "OBC",
            SubsystemKey::Ttc => "TTC",
            SubsystemKey::Sts => "STS",
            SubsystemKey::Payload => "PAYLOAD",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            SubsystemKey::Adcs => "Attitude Determination & Control",
            SubsystemKey::Eps => "Electrical Power System",
            SubsystemKey::Obc => "On-Board Computer",
            SubsystemKey::Ttc => "Telemetry, Tracking & Command",
            SubsystemKey::Sts => "Structural & Thermal System",
            SubsystemKey::Payload => "Hyperspectral Imaging Payload",
        }
    }

    /// One-line hardware summary shown in the hover tooltip.
    pub const fn summary(self) -> &'static str {
        match self {
            SubsystemKey::Adcs => "Reaction wheels, magnetorquers, IMU",
            SubsystemKey::Eps => "Solar panels, MPPT, battery management",
            SubsystemKey::Obc => "Zynq-7000 SoC, TACOS OS",
            SubsystemKey::Ttc => "UHF transceiver, AX.25 protocol",
            SubsystemKey::Sts => "Al 6061-T6 frame, MLI insulation",
            SubsystemKey::Payload => "32 bands, CCSDS compression",
        }
    }

    /// Lowercase slug used in element ids, data attributes, and routes.
    pub const fn slug(self) -> &'static str {
        match self {
            SubsystemKey::Adcs => "adcs",
            SubsystemKey::Eps => "eps",
            SubsystemKey::Obc => "obc",
            SubsystemKey::Ttc => "ttc",
            SubsystemKey::Sts => "sts",
            SubsystemKey::Payload => "payload",
        }
    }

    pub fn route(self) -> String {
        format!("/subsystems/{}", self.slug())
    }

    /// Accent color as a CSS hex string.
    pub const fn css_color(self) -> &'static str {
        match self {
            SubsystemKey::Adcs => "#3b82f6",
            SubsystemKey::Eps => "#eab308",
            SubsystemKey::Obc => "#22c55e",
            SubsystemKey::Ttc => "#ef4444",
            SubsystemKey::Sts => "#6b7280",
            SubsystemKey::Payload => "#a855f7",
        }
    }

    /// Accent color as normalized RGB for marker materials.
    pub const fn color_rgb(self) -> [f32; 3] {
        match self {
            SubsystemKey::Adcs => [0.231, 0.510, 0.965],
            SubsystemKey::Eps => [0.918, 0.702, 0.031],
            SubsystemKey::Obc => [0.133, 0.773, 0.369],
            SubsystemKey::Ttc => [0.937, 0.267, 0.267],
            SubsystemKey::Sts => [0.420, 0.447, 0.502],
            SubsystemKey::Payload => [0.659, 0.333, 0.969],
        }
    }

    pub fn from_slug(slug: &str) -> Option<SubsystemKey> {
        SubsystemKey::ALL.iter().copied().find(|k| k.slug() == slug)
    }

    /// Stable index into per-subsystem arrays (marker instances, levels).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SubsystemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed world-space anchor of a subsystem marker on the satellite body.
/// Tooltips project these through the camera each frame.
#[derive(Clone, Copy, Debug)]
pub struct SceneAnchor {
    pub subsystem: SubsystemKey,
    pub world: Vec3,
}

pub const SCENE_ANCHORS: [SceneAnchor; 6] = [
    SceneAnchor {
        subsystem: SubsystemKey::Adcs,
        world: Vec3::new(0.0, 0.8, -1.0),
    },
    SceneAnchor {
        subsystem: SubsystemKey::Eps,
        world: Vec3::new(0.0, 1.5, 0.0),
    },
    SceneAnchor {
        subsystem: SubsystemKey::Obc,
        world: Vec3::new(0.0, 0.8, 0.5),
    },
    SceneAnchor {
        subsystem: SubsystemKey::Ttc,
        world: Vec3::new(0.0, 1.0, 1.2),
    },
    SceneAnchor {
        subsystem: SubsystemKey::Sts,
        world: Vec3::new(0.8, 0.8, 0.0),
    },
    SceneAnchor {
        subsystem: SubsystemKey::Payload,
        world: Vec3::new(1.2, 0.5, 0.0),
    },
];

/// Shared hover/selection state bridging the 3D scene and the DOM.
///
/// At most one subsystem is hovered and at most one selected at a time.
/// Each field carries a revision counter that bumps only on a real change,
/// so per-frame consumers can skip work when nothing moved. Single-threaded;
/// shared via `Rc` between the frame loop and event handlers.
#[derive(Debug, Default)]
pub struct InteractionStore {
    hovered: Cell<Option<SubsystemKey>>,
    selected: Cell<Option<SubsystemKey>>,
    hovered_rev: Cell<u64>,
    selected_rev: Cell<u64>,
}

impl InteractionStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn hovered(&self) -> Option<SubsystemKey> {
        self.hovered.get()
    }

    #[inline]
    pub fn selected(&self) -> Option<SubsystemKey> {
        self.selected.get()
    }

    /// Replace the hovered subsystem. Setting the already-hovered key is a
    /// no-op and does not bump the revision.
    pub fn set_hovered(&self, key: Option<SubsystemKey>) {
        if self.hovered.get() != key {
            self.hovered.set(key);
            self.hovered_rev.set(self.hovered_rev.get() + 1);
        }
    }

    pub fn set_selected(&self, key: Option<SubsystemKey>) {
        if self.selected.get() != key {
            self.selected.set(key);
            self.selected_rev.set(self.selected_rev.get() + 1);
        }
    }

    #[inline]
    pub fn hovered_rev(&self) -> u64 {
        self.hovered_rev.get()
    }

    #[inline]
    pub fn selected_rev(&self) -> u64 {
        self.selected_rev.get()
    }
}
