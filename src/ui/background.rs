use crate::resources::ResourceId;

/// Hour at which the night background takes over.
pub const NIGHT_STARTS: u32 = 18;
/// Hour at which the day background takes over.
pub const DAY_STARTS: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Background {
    #[default]
    Day,
    Night,
}

impl Background {
    pub fn resource(self) -> ResourceId {
        match self {
            Background::Day => ResourceId::BackgroundDay,
            Background::Night => ResourceId::BackgroundNight,
        }
    }
}

/// Night runs from 18:00 up to (not including) 08:00.
pub fn compute_night_mode(hour: u32) -> Background {
    if hour >= NIGHT_STARTS || hour < DAY_STARTS {
        Background::Night
    } else {
        Background::Day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(compute_night_mode(7), Background::Night);
        assert_eq!(compute_night_mode(8), Background::Day);
        assert_eq!(compute_night_mode(17), Background::Day);
        assert_eq!(compute_night_mode(18), Background::Night);
    }

    #[test]
    fn every_hour() {
        for hour in 0..24 {
            let night = hour >= 18 || hour < 8;
            assert_eq!(compute_night_mode(hour) == Background::Night, night, "hour {}", hour);
        }
    }

    #[test]
    fn resources() {
        assert_eq!(Background::Day.resource(), ResourceId::BackgroundDay);
        assert_eq!(Background::Night.resource(), ResourceId::BackgroundNight);
    }
}
