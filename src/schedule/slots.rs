use serde::{Deserialize, Serialize};

use super::*;

/// Day and hour index of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotPosition {
    pub day: usize,
    pub hour: usize,
}

/// A week of `days` with `hours_per_day` one-hour slots each, the first starting at
/// `first_hour` o'clock. Slots are numbered day-major starting at `1`:
/// `slot = day * hours_per_day + hour + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekGrid {
    pub days: Vec<String>,
    pub hours_per_day: usize,
    pub first_hour: usize,
}

impl Default for WeekGrid {
    /// Monday to Friday, 8:00 to 17:00
    fn default() -> Self {
        Self {
            days: ["Mon", "Tue", "Wed", "Thu", "Fri"]
                .map(String::from)
                .to_vec(),
            hours_per_day: 10,
            first_hour: 8,
        }
    }
}

impl WeekGrid {
    /// Returns the number of slots in the grid
    pub fn slot_count(&self) -> Color {
        (self.days.len() * self.hours_per_day) as Color
    }

    /// Returns the slot of a cell, or `None` if the cell lies outside the grid
    pub fn slot_of(&self, day: usize, hour: usize) -> Option<Color> {
        (day < self.days.len() && hour < self.hours_per_day)
            .then(|| (day * self.hours_per_day + hour + 1) as Color)
    }

    /// Returns the cell of a slot
    pub fn position_of(&self, slot: Color) -> Result<SlotPosition> {
        if slot == 0 || slot > self.slot_count() {
            return Err(Error::SlotOutOfRange {
                slot,
                slots: self.slot_count(),
            });
        }

        let index = slot as usize - 1;
        Ok(SlotPosition {
            day: index / self.hours_per_day,
            hour: index % self.hours_per_day,
        })
    }

    /// Returns the name of a day
    pub fn day_name(&self, day: usize) -> Option<&str> {
        self.days.get(day).map(String::as_str)
    }

    /// Returns the 12-hour clock label of an hour index, e.g. `"1:00 PM"`
    pub fn hour_label(&self, hour: usize) -> String {
        let hour = (self.first_hour + hour) % 24;
        let clock = match hour % 12 {
            0 => 12,
            h => h,
        };
        let suffix = if hour >= 12 { "PM" } else { "AM" };
        format!("{clock}:00 {suffix}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_week() {
        let grid = WeekGrid::default();
        assert_eq!(grid.slot_count(), 50);
        assert_eq!(grid.slot_of(0, 0), Some(1));
        assert_eq!(grid.slot_of(1, 0), Some(11));
        assert_eq!(grid.slot_of(4, 9), Some(50));
        assert_eq!(grid.slot_of(5, 0), None);
        assert_eq!(grid.slot_of(0, 10), None);
        assert_eq!(grid.day_name(2), Some("Wed"));
    }

    #[test]
    fn positions_invert_slots() {
        let grid = WeekGrid::default();
        for day in 0..5 {
            for hour in 0..10 {
                let slot = grid.slot_of(day, hour).unwrap();
                assert_eq!(grid.position_of(slot).unwrap(), SlotPosition { day, hour });
            }
        }

        assert!(matches!(
            grid.position_of(0),
            Err(Error::SlotOutOfRange { slot: 0, slots: 50 })
        ));
        assert!(grid.position_of(51).is_err());
    }

    #[test]
    fn hour_labels() {
        let grid = WeekGrid::default();
        assert_eq!(grid.hour_label(0), "8:00 AM");
        assert_eq!(grid.hour_label(4), "12:00 PM");
        assert_eq!(grid.hour_label(5), "1:00 PM");
        assert_eq!(grid.hour_label(9), "5:00 PM");

        let night = WeekGrid {
            first_hour: 0,
            hours_per_day: 26,
            ..WeekGrid::default()
        };
        assert_eq!(night.hour_label(0), "12:00 AM");
        assert_eq!(night.hour_label(11), "11:00 AM");
        assert_eq!(night.hour_label(23), "11:00 PM");
        assert_eq!(night.hour_label(24), "12:00 AM");
        assert_eq!(night.hour_label(25), "1:00 AM");
    }

    #[test]
    fn partial_config() {
        let grid: WeekGrid =
            serde_json::from_str(r#"{"days": ["Sat", "Sun"], "hours_per_day": 4}"#).unwrap();
        assert_eq!(grid.first_hour, 8);
        assert_eq!(grid.slot_count(), 8);
        assert_eq!(grid.position_of(5).unwrap(), SlotPosition { day: 1, hour: 0 });
    }
}
