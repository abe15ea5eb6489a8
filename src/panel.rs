use crate::catalog::{BiomarkerKey, MARKER_COUNT, ResolvedVector, UserVector};

/// Core 15-marker panel, top markers by selection frequency in the validation
/// cohort. Markers outside this list are always imputed when the Core panel
/// is active.
pub const CORE_PANEL: [BiomarkerKey; 15] = [
    BiomarkerKey::Ca153,
    BiomarkerKey::Cd8,
    BiomarkerKey::Pik3ca,
    BiomarkerKey::Albumin,
    BiomarkerKey::Cea,
    BiomarkerKey::Cd4,
    BiomarkerKey::Esr1Protein,
    BiomarkerKey::Il10,
    BiomarkerKey::Glucose,
    BiomarkerKey::Her2Mutations,
    BiomarkerKey::Tk1,
    BiomarkerKey::Nk,
    BiomarkerKey::Lactate,
    BiomarkerKey::Mdr1,
    BiomarkerKey::IfnGamma,
];

/// Testing panel selected for a derivation run. Each variant carries the R2
/// of the parameter reconstruction achieved with that panel in the validation
/// cohort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Full,
    Optimized,
    Core,
}

impl Panel {
    /// Keys an operator may supply directly; `None` means all 47.
    pub fn selector(&self) -> Option<&'static [BiomarkerKey]> {
        match self {
            Panel::Full | Panel::Optimized => None,
            Panel::Core => Some(&CORE_PANEL),
        }
    }

    pub fn r_squared(&self) -> f64 {
        match self {
            Panel::Full => 0.996,
            Panel::Optimized => 0.93,
            Panel::Core => 0.87,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Panel::Full => "full",
            Panel::Optimized => "optimized",
            Panel::Core => "core",
        }
    }
}

/// Produce the total 47-marker vector used by every downstream calculator.
///
/// Without a selector, user values win and gaps fall back to reference
/// values. With a selector, only listed markers may come from user input;
/// everything else is forced to reference regardless of what was supplied,
/// so a restricted panel cannot smuggle in excluded measurements.
pub fn resolve_with_selector(
    user: &UserVector,
    selector: Option<&[BiomarkerKey]>,
) -> ResolvedVector {
    let restricted = selector.filter(|s| !s.is_empty());
    let mut values = [0.0f64; MARKER_COUNT];
    for key in BiomarkerKey::ALL {
        let selectable = match restricted {
            Some(keys) => keys.contains(&key),
            None => true,
        };
        values[key.index()] = if selectable {
            user.get(key).unwrap_or_else(|| key.reference())
        } else {
            key.reference()
        };
    }
    ResolvedVector::from_values(values)
}

pub fn resolve(user: &UserVector, panel: Panel) -> ResolvedVector {
    resolve_with_selector(user, panel.selector())
}

/// Number of markers the resolver will fill from the reference table rather
/// than from user input.
pub fn imputed_count(user: &UserVector, panel: Panel) -> usize {
    let restricted = panel.selector();
    BiomarkerKey::ALL
        .iter()
        .filter(|&&key| {
            let selectable = match restricted {
                Some(keys) => keys.contains(&key),
                None => true,
            };
            !(selectable && user.get(key).is_some())
        })
        .count()
}
