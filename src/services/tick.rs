use chrono::{Datelike, NaiveDateTime, Timelike};
use enumset::{EnumSet, EnumSetType};

/// Calendar units, finest first.
#[derive(EnumSetType, Debug)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl TimeUnit {
    /// This unit and every coarser one.
    fn and_coarser(self) -> EnumSet<TimeUnit> {
        EnumSet::<TimeUnit>::all()
            .iter()
            .skip_while(|unit| *unit != self)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub time: NaiveDateTime,
    pub units_changed: EnumSet<TimeUnit>,
}

impl Tick {
    /// Tick delivered right after startup, everything counts as changed.
    pub fn initial(time: NaiveDateTime) -> Self {
        Tick {
            time,
            units_changed: EnumSet::all(),
        }
    }
}

/// Turns a stream of clock readings into ticks for one subscribed unit.
#[derive(Debug)]
pub struct TickTimerService {
    unit: TimeUnit,
    last: Option<NaiveDateTime>,
}

impl TickTimerService {
    pub fn subscribe(unit: TimeUnit) -> Self {
        TickTimerService { unit, last: None }
    }

    /// Feed the current time. Yields a tick on the first reading and whenever
    /// the subscribed unit (or a coarser one) differs from the last reading.
    pub fn poll(&mut self, now: NaiveDateTime) -> Option<Tick> {
        let units_changed = match self.last {
            None => EnumSet::all(),
            Some(last) => changed_units(&last, &now),
        };
        self.last = Some(now);

        if units_changed.is_disjoint(self.unit.and_coarser()) {
            return None;
        }

        log::trace!("tick at {}, changed {:?}", now, units_changed);
        Some(Tick {
            time: now,
            units_changed,
        })
    }
}

fn changed_units(last: &NaiveDateTime, now: &NaiveDateTime) -> EnumSet<TimeUnit> {
    let mut changed = EnumSet::new();
    if last.second() != now.second() {
        changed |= TimeUnit::Second;
    }
    if last.minute() != now.minute() {
        changed |= TimeUnit::Minute;
    }
    if last.hour() != now.hour() {
        changed |= TimeUnit::Hour;
    }
    if last.day() != now.day() {
        changed |= TimeUnit::Day;
    }
    if last.month() != now.month() {
        changed |= TimeUnit::Month;
    }
    if last.year() != now.year() {
        changed |= TimeUnit::Year;
    }
    changed
}
