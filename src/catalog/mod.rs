pub mod registry;

/// Clinical grouping of a biomarker within the 47-marker panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Tumor,
    Immune,
    Resistance,
    Metabolic,
    Organ,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Tumor,
        Category::Immune,
        Category::Resistance,
        Category::Metabolic,
        Category::Organ,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tumor => "tumor",
            Category::Immune => "immune",
            Category::Resistance => "resistance",
            Category::Metabolic => "metabolic",
            Category::Organ => "organ",
        }
    }

    pub fn parse(s: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.as_str() == s)
    }
}

/// One of the 47 recognized blood biomarkers.
///
/// The discriminant doubles as the index into dense per-marker arrays, so the
/// variant order here is the canonical panel order (tumor, immune, resistance,
/// metabolic, organ).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(usize)]
pub enum BiomarkerKey {
    // Tumor markers (6)
    Ca153,
    Ca2729,
    Cea,
    Tk1,
    Ctdna,
    Esr1Protein,
    // Immune function markers (12)
    Cd8,
    Cd4,
    Nk,
    IfnGamma,
    Il10,
    TnfAlpha,
    TgfBeta,
    Pdl1Ctc,
    HlaDr,
    Ctc,
    Ang2,
    Lymphocytes,
    // Resistance markers (16)
    Esr1Mutations,
    Pgr,
    Brca,
    Pik3ca,
    Tp53,
    Her2Mutations,
    Her2Circ,
    Mdr1,
    Cyp2d6,
    Survivin,
    Hsp,
    Mir200,
    Exosomes,
    Vegf,
    Mrp1,
    Ki67,
    // Metabolic markers (8)
    Glucose,
    Lactate,
    Ldh,
    Albumin,
    BetaHydroxybutyrate,
    BloodPh,
    Folate,
    VitaminD,
    // Organ function markers (5)
    Creatinine,
    Bun,
    Alt,
    Ast,
    Bilirubin,
}

pub const MARKER_COUNT: usize = 47;

impl BiomarkerKey {
    pub const ALL: [BiomarkerKey; MARKER_COUNT] = [
        BiomarkerKey::Ca153,
        BiomarkerKey::Ca2729,
        BiomarkerKey::Cea,
        BiomarkerKey::Tk1,
        BiomarkerKey::Ctdna,
        BiomarkerKey::Esr1Protein,
        BiomarkerKey::Cd8,
        BiomarkerKey::Cd4,
        BiomarkerKey::Nk,
        BiomarkerKey::IfnGamma,
        BiomarkerKey::Il10,
        BiomarkerKey::TnfAlpha,
        BiomarkerKey::TgfBeta,
        BiomarkerKey::Pdl1Ctc,
        BiomarkerKey::HlaDr,
        BiomarkerKey::Ctc,
        BiomarkerKey::Ang2,
        BiomarkerKey::Lymphocytes,
        BiomarkerKey::Esr1Mutations,
        BiomarkerKey::Pgr,
        BiomarkerKey::Brca,
        BiomarkerKey::Pik3ca,
        BiomarkerKey::Tp53,
        BiomarkerKey::Her2Mutations,
        BiomarkerKey::Her2Circ,
        BiomarkerKey::Mdr1,
        BiomarkerKey::Cyp2d6,
        BiomarkerKey::Survivin,
        BiomarkerKey::Hsp,
        BiomarkerKey::Mir200,
        BiomarkerKey::Exosomes,
        BiomarkerKey::Vegf,
        BiomarkerKey::Mrp1,
        BiomarkerKey::Ki67,
        BiomarkerKey::Glucose,
        BiomarkerKey::Lactate,
        BiomarkerKey::Ldh,
        BiomarkerKey::Albumin,
        BiomarkerKey::BetaHydroxybutyrate,
        BiomarkerKey::BloodPh,
        BiomarkerKey::Folate,
        BiomarkerKey::VitaminD,
        BiomarkerKey::Creatinine,
        BiomarkerKey::Bun,
        BiomarkerKey::Alt,
        BiomarkerKey::Ast,
        BiomarkerKey::Bilirubin,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BiomarkerKey::Ca153 => "ca153",
            BiomarkerKey::Ca2729 => "ca2729",
            BiomarkerKey::Cea => "cea",
            BiomarkerKey::Tk1 => "tk1",
            BiomarkerKey::Ctdna => "ctdna",
            BiomarkerKey::Esr1Protein => "esr1_protein",
            BiomarkerKey::Cd8 => "cd8",
            BiomarkerKey::Cd4 => "cd4",
            BiomarkerKey::Nk => "nk",
            BiomarkerKey::IfnGamma => "ifn_gamma",
            BiomarkerKey::Il10 => "il10",
            BiomarkerKey::TnfAlpha => "tnf_alpha",
            BiomarkerKey::TgfBeta => "tgf_beta",
            BiomarkerKey::Pdl1Ctc => "pdl1_ctc",
            BiomarkerKey::HlaDr => "hla_dr",
            BiomarkerKey::Ctc => "ctc",
            BiomarkerKey::Ang2 => "ang2",
            BiomarkerKey::Lymphocytes => "lymphocytes",
            BiomarkerKey::Esr1Mutations => "esr1_mutations",
            BiomarkerKey::Pgr => "pgr",
            BiomarkerKey::Brca => "brca",
            BiomarkerKey::Pik3ca => "pik3ca",
            BiomarkerKey::Tp53 => "tp53",
            BiomarkerKey::Her2Mutations => "her2_mutations",
            BiomarkerKey::Her2Circ => "her2_circ",
            BiomarkerKey::Mdr1 => "mdr1",
            BiomarkerKey::Cyp2d6 => "cyp2d6",
            BiomarkerKey::Survivin => "survivin",
            BiomarkerKey::Hsp => "hsp",
            BiomarkerKey::Mir200 => "mir200",
            BiomarkerKey::Exosomes => "exosomes",
            BiomarkerKey::Vegf => "vegf",
            BiomarkerKey::Mrp1 => "mrp1",
            BiomarkerKey::Ki67 => "ki67",
            BiomarkerKey::Glucose => "glucose",
            BiomarkerKey::Lactate => "lactate",
            BiomarkerKey::Ldh => "ldh",
            BiomarkerKey::Albumin => "albumin",
            BiomarkerKey::BetaHydroxybutyrate => "beta_hydroxybutyrate",
            BiomarkerKey::BloodPh => "blood_ph",
            BiomarkerKey::Folate => "folate",
            BiomarkerKey::VitaminD => "vitamin_d",
            BiomarkerKey::Creatinine => "creatinine",
            BiomarkerKey::Bun => "bun",
            BiomarkerKey::Alt => "alt",
            BiomarkerKey::Ast => "ast",
            BiomarkerKey::Bilirubin => "bilirubin",
        }
    }

    pub fn parse(s: &str) -> Option<BiomarkerKey> {
        BiomarkerKey::ALL.iter().copied().find(|k| k.as_str() == s)
    }

    pub fn category(&self) -> Category {
        match self {
            BiomarkerKey::Ca153
            | BiomarkerKey::Ca2729
            | BiomarkerKey::Cea
            | BiomarkerKey::Tk1
            | BiomarkerKey::Ctdna
            | BiomarkerKey::Esr1Protein => Category::Tumor,
            BiomarkerKey::Cd8
            | BiomarkerKey::Cd4
            | BiomarkerKey::Nk
            | BiomarkerKey::IfnGamma
            | BiomarkerKey::Il10
            | BiomarkerKey::TnfAlpha
            | BiomarkerKey::TgfBeta
            | BiomarkerKey::Pdl1Ctc
            | BiomarkerKey::HlaDr
            | BiomarkerKey::Ctc
            | BiomarkerKey::Ang2
            | BiomarkerKey::Lymphocytes => Category::Immune,
            BiomarkerKey::Esr1Mutations
            | BiomarkerKey::Pgr
            | BiomarkerKey::Brca
            | BiomarkerKey::Pik3ca
            | BiomarkerKey::Tp53
            | BiomarkerKey::Her2Mutations
            | BiomarkerKey::Her2Circ
            | BiomarkerKey::Mdr1
            | BiomarkerKey::Cyp2d6
            | BiomarkerKey::Survivin
            | BiomarkerKey::Hsp
            | BiomarkerKey::Mir200
            | BiomarkerKey::Exosomes
            | BiomarkerKey::Vegf
            | BiomarkerKey::Mrp1
            | BiomarkerKey::Ki67 => Category::Resistance,
            BiomarkerKey::Glucose
            | BiomarkerKey::Lactate
            | BiomarkerKey::Ldh
            | BiomarkerKey::Albumin
            | BiomarkerKey::BetaHydroxybutyrate
            | BiomarkerKey::BloodPh
            | BiomarkerKey::Folate
            | BiomarkerKey::VitaminD => Category::Metabolic,
            BiomarkerKey::Creatinine
            | BiomarkerKey::Bun
            | BiomarkerKey::Alt
            | BiomarkerKey::Ast
            | BiomarkerKey::Bilirubin => Category::Organ,
        }
    }

    /// Clinically-normal value used to impute this marker when the panel
    /// omits it. Mid-normal, formula-safe: never zero where a formula divides
    /// or degenerates, so a fully-imputed vector stays well-defined.
    pub fn reference(&self) -> f64 {
        match self {
            BiomarkerKey::Ca153 => 15.65,
            BiomarkerKey::Ca2729 => 19.0,
            BiomarkerKey::Cea => 1.5,
            BiomarkerKey::Tk1 => 1.0,
            BiomarkerKey::Ctdna => 0.25,
            BiomarkerKey::Esr1Protein => 3.0,
            BiomarkerKey::Cd8 => 700.0,
            BiomarkerKey::Cd4 => 1050.0,
            BiomarkerKey::Nk => 345.0,
            BiomarkerKey::IfnGamma => 2.0,
            BiomarkerKey::Il10 => 2.5,
            BiomarkerKey::TnfAlpha => 4.0,
            BiomarkerKey::TgfBeta => 2.5,
            BiomarkerKey::Pdl1Ctc => 0.5,
            BiomarkerKey::HlaDr => 80.0,
            BiomarkerKey::Ctc => 2.5,
            BiomarkerKey::Ang2 => 2000.0,
            BiomarkerKey::Lymphocytes => 2000.0,
            BiomarkerKey::Esr1Mutations => 0.0,
            BiomarkerKey::Pgr => 10.0,
            BiomarkerKey::Brca => 0.0,
            BiomarkerKey::Pik3ca => 0.0,
            BiomarkerKey::Tp53 => 0.0,
            BiomarkerKey::Her2Mutations => 0.0,
            BiomarkerKey::Her2Circ => 2.5,
            BiomarkerKey::Mdr1 => 75.0,
            BiomarkerKey::Cyp2d6 => 1.5,
            BiomarkerKey::Survivin => 0.25,
            BiomarkerKey::Hsp => 7.5,
            BiomarkerKey::Mir200 => 2.5,
            BiomarkerKey::Exosomes => 50.0,
            BiomarkerKey::Vegf => 200.0,
            BiomarkerKey::Mrp1 => 50.0,
            BiomarkerKey::Ki67 => 15.0,
            BiomarkerKey::Glucose => 95.0,
            BiomarkerKey::Lactate => 1.1,
            BiomarkerKey::Ldh => 125.0,
            BiomarkerKey::Albumin => 4.0,
            BiomarkerKey::BetaHydroxybutyrate => 0.25,
            BiomarkerKey::BloodPh => 7.4,
            BiomarkerKey::Folate => 10.0,
            BiomarkerKey::VitaminD => 40.0,
            BiomarkerKey::Creatinine => 1.0,
            BiomarkerKey::Bun => 15.0,
            BiomarkerKey::Alt => 25.0,
            BiomarkerKey::Ast => 25.0,
            BiomarkerKey::Bilirubin => 1.0,
        }
    }
}

/// Partial biomarker panel as supplied by the caller. Absent entries mean
/// "not measured", never zero.
#[derive(Debug, Clone, PartialEq)]
pub struct UserVector {
    values: [Option<f64>; MARKER_COUNT],
}

impl UserVector {
    pub fn empty() -> Self {
        Self {
            values: [None; MARKER_COUNT],
        }
    }

    pub fn set(&mut self, key: BiomarkerKey, value: f64) {
        self.values[key.index()] = Some(value);
    }

    pub fn get(&self, key: BiomarkerKey) -> Option<f64> {
        self.values[key.index()]
    }

    pub fn supplied_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BiomarkerKey, f64)> + '_ {
        BiomarkerKey::ALL
            .iter()
            .filter_map(|&k| self.values[k.index()].map(|v| (k, v)))
    }
}

impl FromIterator<(BiomarkerKey, f64)> for UserVector {
    fn from_iter<I: IntoIterator<Item = (BiomarkerKey, f64)>>(iter: I) -> Self {
        let mut v = UserVector::empty();
        for (key, value) in iter {
            v.set(key, value);
        }
        v
    }
}

/// Total biomarker panel: all 47 markers populated, every entry finite and
/// non-negative. Only the panel resolver constructs these.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedVector {
    values: [f64; MARKER_COUNT],
}

impl ResolvedVector {
    pub(crate) fn from_values(values: [f64; MARKER_COUNT]) -> Self {
        Self { values }
    }

    pub fn get(&self, key: BiomarkerKey) -> f64 {
        self.values[key.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (BiomarkerKey, f64)> + '_ {
        BiomarkerKey::ALL
            .iter()
            .map(|&k| (k, self.values[k.index()]))
    }
}
