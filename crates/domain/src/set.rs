use std::fmt;

/// A single recorded performance of an exercise.
///
/// Sets are only used for historical summaries. The planned number of sets of
/// an exercise is stored separately in [`crate::Exercise::sets`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Set {
    pub reps: u32,
    pub weight: Option<f32>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    #[default]
    Lbs,
    Kg,
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                WeightUnit::Lbs => "lbs",
                WeightUnit::Kg => "kg",
            }
        )
    }
}

#[must_use]
pub fn sets_summary(sets: Option<&[Set]>) -> String {
    match sets.map_or(0, <[Set]>::len) {
        0 => String::from("No sets"),
        1 => String::from("1 set"),
        n => format!("{n} sets"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AverageReps {
    NoData,
    Reps(u32),
}

impl fmt::Display for AverageReps {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AverageReps::NoData => write!(f, "N/A"),
            AverageReps::Reps(reps) => write!(f, "{reps}"),
        }
    }
}

/// Mean of the reps of all sets, rounded half up.
#[must_use]
pub fn average_reps(sets: Option<&[Set]>) -> AverageReps {
    let Some(sets) = sets.filter(|sets| !sets.is_empty()) else {
        return AverageReps::NoData;
    };
    let total = sets.iter().map(|s| u64::from(s.reps)).sum::<u64>();
    let count = sets.len() as u64;
    let rounded = (2 * total + count) / (2 * count);
    AverageReps::Reps(u32::try_from(rounded).unwrap_or(u32::MAX))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightRange {
    NoData,
    Bodyweight,
    Single(f32),
    Range { min: f32, max: f32 },
}

impl WeightRange {
    #[must_use]
    pub fn display(&self, unit: WeightUnit) -> String {
        match self {
            WeightRange::NoData => String::from("N/A"),
            WeightRange::Bodyweight => String::from("bodyweight"),
            WeightRange::Single(weight) => format!("{weight} {unit}"),
            WeightRange::Range { min, max } => format!("{min}-{max} {unit}"),
        }
    }
}

impl fmt::Display for WeightRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display(WeightUnit::default()))
    }
}

#[must_use]
pub fn weight_range(sets: Option<&[Set]>) -> WeightRange {
    let Some(sets) = sets.filter(|sets| !sets.is_empty()) else {
        return WeightRange::NoData;
    };
    let weights = sets.iter().filter_map(|s| s.weight).collect::<Vec<_>>();
    if weights.is_empty() {
        return WeightRange::Bodyweight;
    }
    let min = weights.iter().copied().fold(f32::MAX, f32::min);
    let max = weights.iter().copied().fold(f32::MIN, f32::max);
    #[allow(clippy::float_cmp)]
    let single = min == max;
    if single {
        WeightRange::Single(min)
    } else {
        WeightRange::Range { min, max }
    }
}
