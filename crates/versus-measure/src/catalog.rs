//! Measure catalog
//!
//! [`Measure`] names every histogram measure of this crate so that callers
//! can select one at runtime (from configuration, a command line, a test
//! table) and evaluate it through a single entry point.

use std::fmt;
use std::str::FromStr;

use versus_core::{Error, Result};

use crate::{
    chi_squared, combination, fidelity, inner_product, intersection, l1, minkowski, shannon,
};

/// Family a measure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Lp Minkowski distances
    Minkowski,
    /// Normalized absolute differences
    L1,
    /// Bin-wise overlap `min(P, Q)`
    Intersection,
    /// Bin-wise product `P·Q`
    InnerProduct,
    /// Bhattacharyya coefficient and squared chord
    Fidelity,
    /// Weighted squared differences (χ²)
    SquaredL2,
    /// Entropy-based divergences
    Shannon,
    /// Mixtures of the other families
    Combination,
}

impl Family {
    pub fn name(&self) -> &'static str {
        match self {
            Family::Minkowski => "minkowski",
            Family::L1 => "l1",
            Family::Intersection => "intersection",
            Family::InnerProduct => "inner_product",
            Family::Fidelity => "fidelity",
            Family::SquaredL2 => "squared_l2",
            Family::Shannon => "shannon",
            Family::Combination => "combination",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A histogram measure, selectable at runtime
///
/// Every variant maps to one function of the family modules;
/// [`evaluate`](Self::evaluate) dispatches to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measure {
    // Minkowski
    Euclidean,
    CityBlock,
    /// Lp distance with the given power
    Minkowski(u32),
    Chebyshev,

    // L1
    Sorensen,
    /// Gower with a unit range per bin
    Gower,
    Soergel,
    KulczynskiD,
    Canberra,
    Lorentzian,

    // Intersection
    Intersection,
    IntersectionComplement,
    WaveHedges,
    WaveHedgesAlt,
    Czekanowski,
    CzekanowskiComplement,
    Motyka,
    MotykaComplement,
    KulczynskiS,
    Ruzicka,
    Tanimoto,
    TanimotoAlt,

    // Inner product
    InnerProduct,
    HarmonicMean,
    Cosine,
    KumarHassebrook,
    Jaccard,
    JaccardDistance,
    Dice,
    DiceDistance,

    // Fidelity
    Fidelity,
    Bhattacharyya,
    Hellinger,
    HellingerAlt,
    Matusita,
    MatusitaAlt,
    SquaredChord,
    SquaredChordSimilarity,

    // Squared L2
    SquaredEuclidean,
    PearsonChiSquared,
    NeymanChiSquared,
    SquaredChiSquared,
    ProbabilisticSymmetricChiSquared,
    Divergence,
    Clark,
    AdditiveSymmetricChiSquared,

    // Shannon
    KullbackLeibler,
    Jeffreys,
    KDivergence,
    Topsoe,
    JensenShannon,
    JensenDifference,

    // Combination
    Taneja,
    KumarJohnson,
    AvgL1LInf,
}

/// Power used for [`Measure::Minkowski`] in [`Measure::ALL`]
pub const DEFAULT_MINKOWSKI_POWER: u32 = 3;

impl Measure {
    /// Every measure, grouped by family; Minkowski appears with
    /// [`DEFAULT_MINKOWSKI_POWER`].
    pub const ALL: [Measure; 55] = [
        Measure::Euclidean,
        Measure::CityBlock,
        Measure::Minkowski(DEFAULT_MINKOWSKI_POWER),
        Measure::Chebyshev,
        Measure::Sorensen,
        Measure::Gower,
        Measure::Soergel,
        Measure::KulczynskiD,
        Measure::Canberra,
        Measure::Lorentzian,
        Measure::Intersection,
        Measure::IntersectionComplement,
        Measure::WaveHedges,
        Measure::WaveHedgesAlt,
        Measure::Czekanowski,
        Measure::CzekanowskiComplement,
        Measure::Motyka,
        Measure::MotykaComplement,
        Measure::KulczynskiS,
        Measure::Ruzicka,
        Measure::Tanimoto,
        Measure::TanimotoAlt,
        Measure::InnerProduct,
        Measure::HarmonicMean,
        Measure::Cosine,
        Measure::KumarHassebrook,
        Measure::Jaccard,
        Measure::JaccardDistance,
        Measure::Dice,
        Measure::DiceDistance,
        Measure::Fidelity,
        Measure::Bhattacharyya,
        Measure::Hellinger,
        Measure::HellingerAlt,
        Measure::Matusita,
        Measure::MatusitaAlt,
        Measure::SquaredChord,
        Measure::SquaredChordSimilarity,
        Measure::SquaredEuclidean,
        Measure::PearsonChiSquared,
        Measure::NeymanChiSquared,
        Measure::SquaredChiSquared,
        Measure::ProbabilisticSymmetricChiSquared,
        Measure::Divergence,
        Measure::Clark,
        Measure::AdditiveSymmetricChiSquared,
        Measure::KullbackLeibler,
        Measure::Jeffreys,
        Measure::KDivergence,
        Measure::Topsoe,
        Measure::JensenShannon,
        Measure::JensenDifference,
        Measure::Taneja,
        Measure::KumarJohnson,
        Measure::AvgL1LInf,
    ];

    /// Stable snake_case identifier; [`Measure::Minkowski`] reports
    /// `"minkowski"` whatever its power.
    pub fn name(&self) -> &'static str {
        match self {
            Measure::Euclidean => "euclidean",
            Measure::CityBlock => "city_block",
            Measure::Minkowski(_) => "minkowski",
            Measure::Chebyshev => "chebyshev",
            Measure::Sorensen => "sorensen",
            Measure::Gower => "gower",
            Measure::Soergel => "soergel",
            Measure::KulczynskiD => "kulczynski_d",
            Measure::Canberra => "canberra",
            Measure::Lorentzian => "lorentzian",
            Measure::Intersection => "intersection",
            Measure::IntersectionComplement => "intersection_complement",
            Measure::WaveHedges => "wave_hedges",
            Measure::WaveHedgesAlt => "wave_hedges_alt",
            Measure::Czekanowski => "czekanowski",
            Measure::CzekanowskiComplement => "czekanowski_complement",
            Measure::Motyka => "motyka",
            Measure::MotykaComplement => "motyka_complement",
            Measure::KulczynskiS => "kulczynski_s",
            Measure::Ruzicka => "ruzicka",
            Measure::Tanimoto => "tanimoto",
            Measure::TanimotoAlt => "tanimoto_alt",
            Measure::InnerProduct => "inner_product",
            Measure::HarmonicMean => "harmonic_mean",
            Measure::Cosine => "cosine",
            Measure::KumarHassebrook => "kumar_hassebrook",
            Measure::Jaccard => "jaccard",
            Measure::JaccardDistance => "jaccard_distance",
            Measure::Dice => "dice",
            Measure::DiceDistance => "dice_distance",
            Measure::Fidelity => "fidelity",
            Measure::Bhattacharyya => "bhattacharyya",
            Measure::Hellinger => "hellinger",
            Measure::HellingerAlt => "hellinger_alt",
            Measure::Matusita => "matusita",
            Measure::MatusitaAlt => "matusita_alt",
            Measure::SquaredChord => "squared_chord",
            Measure::SquaredChordSimilarity => "squared_chord_similarity",
            Measure::SquaredEuclidean => "squared_euclidean",
            Measure::PearsonChiSquared => "pearson_chi_squared",
            Measure::NeymanChiSquared => "neyman_chi_squared",
            Measure::SquaredChiSquared => "squared_chi_squared",
            Measure::ProbabilisticSymmetricChiSquared => "probabilistic_symmetric_chi_squared",
            Measure::Divergence => "divergence",
            Measure::Clark => "clark",
            Measure::AdditiveSymmetricChiSquared => "additive_symmetric_chi_squared",
            Measure::KullbackLeibler => "kullback_leibler",
            Measure::Jeffreys => "jeffreys",
            Measure::KDivergence => "k_divergence",
            Measure::Topsoe => "topsoe",
            Measure::JensenShannon => "jensen_shannon",
            Measure::JensenDifference => "jensen_difference",
            Measure::Taneja => "taneja",
            Measure::KumarJohnson => "kumar_johnson",
            Measure::AvgL1LInf => "avg_l1_linf",
        }
    }

    /// Family the measure belongs to
    pub fn family(&self) -> Family {
        match self {
            Measure::Euclidean | Measure::CityBlock | Measure::Minkowski(_) | Measure::Chebyshev => {
                Family::Minkowski
            }
            Measure::Sorensen
            | Measure::Gower
            | Measure::Soergel
            | Measure::KulczynskiD
            | Measure::Canberra
            | Measure::Lorentzian => Family::L1,
            Measure::Intersection
            | Measure::IntersectionComplement
            | Measure::WaveHedges
            | Measure::WaveHedgesAlt
            | Measure::Czekanowski
            | Measure::CzekanowskiComplement
            | Measure::Motyka
            | Measure::MotykaComplement
            | Measure::KulczynskiS
            | Measure::Ruzicka
            | Measure::Tanimoto
            | Measure::TanimotoAlt => Family::Intersection,
            Measure::InnerProduct
            | Measure::HarmonicMean
            | Measure::Cosine
            | Measure::KumarHassebrook
            | Measure::Jaccard
            | Measure::JaccardDistance
            | Measure::Dice
            | Measure::DiceDistance => Family::InnerProduct,
            Measure::Fidelity
            | Measure::Bhattacharyya
            | Measure::Hellinger
            | Measure::HellingerAlt
            | Measure::Matusita
            | Measure::MatusitaAlt
            | Measure::SquaredChord
            | Measure::SquaredChordSimilarity => Family::Fidelity,
            Measure::SquaredEuclidean
            | Measure::PearsonChiSquared
            | Measure::NeymanChiSquared
            | Measure::SquaredChiSquared
            | Measure::ProbabilisticSymmetricChiSquared
            | Measure::Divergence
            | Measure::Clark
            | Measure::AdditiveSymmetricChiSquared => Family::SquaredL2,
            Measure::KullbackLeibler
            | Measure::Jeffreys
            | Measure::KDivergence
            | Measure::Topsoe
            | Measure::JensenShannon
            | Measure::JensenDifference => Family::Shannon,
            Measure::Taneja | Measure::KumarJohnson | Measure::AvgL1LInf => Family::Combination,
        }
    }

    /// Evaluate the measure on two histograms
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if `p` and `q` differ in length, and
    /// `Error::InvalidParameter` for `Minkowski(0)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use versus_measure::Measure;
    ///
    /// let p = [1.0, 0.0, 0.0, 0.0];
    /// let q = [0.0, 1.0, 0.0, 0.0];
    /// assert_eq!(Measure::CityBlock.evaluate(&p, &q).unwrap(), 2.0);
    /// assert_eq!(Measure::Cosine.evaluate(&p, &q).unwrap(), 0.0);
    /// ```
    pub fn evaluate(&self, p: &[f64], q: &[f64]) -> Result<f64> {
        let value = match self {
            Measure::Euclidean => minkowski::euclidean(p, q),
            Measure::CityBlock => minkowski::city_block(p, q),
            Measure::Minkowski(power) => minkowski::minkowski(p, q, *power),
            Measure::Chebyshev => minkowski::chebyshev(p, q),
            Measure::Sorensen => l1::sorensen(p, q),
            Measure::Gower => l1::gower(p, q, &vec![1.0; p.len()]),
            Measure::Soergel => l1::soergel(p, q),
            Measure::KulczynskiD => l1::kulczynski_d(p, q),
            Measure::Canberra => l1::canberra(p, q),
            Measure::Lorentzian => l1::lorentzian(p, q),
            Measure::Intersection => intersection::intersection(p, q),
            Measure::IntersectionComplement => intersection::intersection_complement(p, q),
            Measure::WaveHedges => intersection::wave_hedges(p, q),
            Measure::WaveHedgesAlt => intersection::wave_hedges_alt(p, q),
            Measure::Czekanowski => intersection::czekanowski(p, q),
            Measure::CzekanowskiComplement => intersection::czekanowski_complement(p, q),
            Measure::Motyka => intersection::motyka(p, q),
            Measure::MotykaComplement => intersection::motyka_complement(p, q),
            Measure::KulczynskiS => intersection::kulczynski_s(p, q),
            Measure::Ruzicka => intersection::ruzicka(p, q),
            Measure::Tanimoto => intersection::tanimoto(p, q),
            Measure::TanimotoAlt => intersection::tanimoto_alt(p, q),
            Measure::InnerProduct => inner_product::inner_product(p, q),
            Measure::HarmonicMean => inner_product::harmonic_mean(p, q),
            Measure::Cosine => inner_product::cosine(p, q),
            Measure::KumarHassebrook => inner_product::kumar_hassebrook(p, q),
            Measure::Jaccard => inner_product::jaccard(p, q),
            Measure::JaccardDistance => inner_product::jaccard_distance(p, q),
            Measure::Dice => inner_product::dice(p, q),
            Measure::DiceDistance => inner_product::dice_distance(p, q),
            Measure::Fidelity => fidelity::fidelity(p, q),
            Measure::Bhattacharyya => fidelity::bhattacharyya(p, q),
            Measure::Hellinger => fidelity::hellinger(p, q),
            Measure::HellingerAlt => fidelity::hellinger_alt(p, q),
            Measure::Matusita => fidelity::matusita(p, q),
            Measure::MatusitaAlt => fidelity::matusita_alt(p, q),
            Measure::SquaredChord => fidelity::squared_chord(p, q),
            Measure::SquaredChordSimilarity => fidelity::squared_chord_similarity(p, q),
            Measure::SquaredEuclidean => chi_squared::squared_euclidean(p, q),
            Measure::PearsonChiSquared => chi_squared::pearson_chi_squared(p, q),
            Measure::NeymanChiSquared => chi_squared::neyman_chi_squared(p, q),
            Measure::SquaredChiSquared => chi_squared::squared_chi_squared(p, q),
            Measure::ProbabilisticSymmetricChiSquared => {
                chi_squared::probabilistic_symmetric_chi_squared(p, q)
            }
            Measure::Divergence => chi_squared::divergence(p, q),
            Measure::Clark => chi_squared::clark(p, q),
            Measure::AdditiveSymmetricChiSquared => {
                chi_squared::additive_symmetric_chi_squared(p, q)
            }
            Measure::KullbackLeibler => shannon::kullback_leibler(p, q),
            Measure::Jeffreys => shannon::jeffreys(p, q),
            Measure::KDivergence => shannon::k_divergence(p, q),
            Measure::Topsoe => shannon::topsoe(p, q),
            Measure::JensenShannon => shannon::jensen_shannon(p, q),
            Measure::JensenDifference => shannon::jensen_difference(p, q),
            Measure::Taneja => combination::taneja(p, q),
            Measure::KumarJohnson => combination::kumar_johnson(p, q),
            Measure::AvgL1LInf => combination::avg_l1_linf(p, q),
        }?;

        log::trace!("{self}: {value}");
        Ok(value)
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Minkowski(power) => write!(f, "minkowski_{power}"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Measure {
    type Err = Error;

    /// Parse a measure from its [`Display`](fmt::Display) form.
    ///
    /// Minkowski is written with its power, e.g. `minkowski_2`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(power) = s.strip_prefix("minkowski_") {
            return power
                .parse::<u32>()
                .ok()
                .filter(|&p| p > 0)
                .map(Measure::Minkowski)
                .ok_or_else(|| Error::InvalidParameter(format!("invalid minkowski power: {s}")));
        }

        Measure::ALL
            .iter()
            .copied()
            .filter(|m| !matches!(m, Measure::Minkowski(_)))
            .find(|m| m.name() == s)
            .ok_or_else(|| Error::InvalidParameter(format!("unknown measure: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = Measure::ALL.iter().map(Measure::name).collect();
        assert_eq!(names.len(), Measure::ALL.len());
    }

    #[test]
    fn test_display_parses_back() {
        for m in Measure::ALL {
            let parsed: Measure = m.to_string().parse().unwrap();
            assert_eq!(parsed, m);
        }
    }

    #[test]
    fn test_parse_minkowski() {
        assert_eq!("minkowski_2".parse::<Measure>().unwrap(), Measure::Minkowski(2));
        assert!("minkowski_0".parse::<Measure>().is_err());
        assert!("minkowski_x".parse::<Measure>().is_err());
        assert!("minkowski".parse::<Measure>().is_err());
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            "manhattan".parse::<Measure>(),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_families() {
        assert_eq!(Measure::Minkowski(4).family(), Family::Minkowski);
        assert_eq!(Measure::Gower.family(), Family::L1);
        assert_eq!(Measure::Tanimoto.family(), Family::Intersection);
        assert_eq!(Measure::Dice.family(), Family::InnerProduct);
        assert_eq!(Measure::Hellinger.family(), Family::Fidelity);
        assert_eq!(Measure::Clark.family(), Family::SquaredL2);
        assert_eq!(Measure::Topsoe.family(), Family::Shannon);
        assert_eq!(Measure::Taneja.family(), Family::Combination);
        assert_eq!(Family::SquaredL2.to_string(), "squared_l2");
    }

    #[test]
    fn test_gower_uses_unit_range() {
        let p = [0.5, 0.5];
        let q = [0.0, 1.0];
        let direct = l1::gower(&p, &q, &[1.0, 1.0]).unwrap();
        assert_eq!(Measure::Gower.evaluate(&p, &q).unwrap(), direct);
    }

    #[test]
    fn test_evaluate_propagates_length_mismatch() {
        for m in Measure::ALL {
            assert!(
                matches!(
                    m.evaluate(&[0.5, 0.5], &[1.0]),
                    Err(Error::LengthMismatch { .. })
                ),
                "{m} accepted mismatched lengths"
            );
        }
    }
}
