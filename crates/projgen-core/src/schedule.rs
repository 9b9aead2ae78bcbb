//! Sprint arithmetic.
//!
//! A project of `d` days is split into four sprints at the cut points
//! `ceil(d/4)`, `ceil(d/2)`, `ceil(3d/4)` and `d`. Every generated document
//! that mentions a day range reads it from the same [`SprintPlan`].

use serde::Serialize;

/// Number of sprints (and milestones) in every project.
pub const SPRINT_COUNT: usize = 4;

/// An inclusive range of project days. Empty when `start > end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayRange {
    pub start: u32,
    pub end: u32,
}

impl DayRange {
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn len(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }

    pub fn contains(&self, day: u32) -> bool {
        self.start <= day && day <= self.end
    }

    /// Human label: `"3-5"`, `"4"` for a single day, `"none"` when empty.
    pub fn label(&self) -> String {
        if self.is_empty() {
            "none".to_string()
        } else if self.start == self.end {
            self.start.to_string()
        } else {
            format!("{}-{}", self.start, self.end)
        }
    }

    /// Iterate the days of the range in order.
    pub fn days(&self) -> impl Iterator<Item = u32> {
        self.start..=self.end
    }
}

/// Four consecutive sprints covering days `1..=duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SprintPlan {
    pub duration: u32,
    ranges: [DayRange; SPRINT_COUNT],
}

impl SprintPlan {
    pub fn for_duration(duration: u32) -> Self {
        // ceil(d * k / 4) without floating point
        let cut = |k: u32| (duration * k + 3) / 4;
        let cuts = [cut(1), cut(2), cut(3), duration];

        let mut ranges = [DayRange { start: 1, end: 0 }; SPRINT_COUNT];
        let mut start = 1;
        for (range, end) in ranges.iter_mut().zip(cuts) {
            *range = DayRange { start, end };
            start = start.max(end + 1);
        }

        Self { duration, ranges }
    }

    pub fn ranges(&self) -> &[DayRange; SPRINT_COUNT] {
        &self.ranges
    }

    /// Range of a one-based sprint number.
    pub fn sprint(&self, number: usize) -> Option<DayRange> {
        number
            .checked_sub(1)
            .and_then(|i| self.ranges.get(i))
            .copied()
    }

    /// Length of the longest sprint, in days.
    pub fn max_sprint_len(&self) -> u32 {
        self.ranges.iter().map(DayRange::len).max().unwrap_or(0)
    }

    /// One-based sprint number containing `day`, if the day is in the project.
    pub fn sprint_for_day(&self, day: u32) -> Option<usize> {
        self.ranges
            .iter()
            .position(|r| r.contains(day))
            .map(|i| i + 1)
    }

    pub fn labels(&self) -> Vec<String> {
        self.ranges.iter().map(DayRange::label).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_day_plan() {
        let plan = SprintPlan::for_duration(10);
        assert_eq!(plan.labels(), vec!["1-3", "4-5", "6-8", "9-10"]);
        assert_eq!(plan.max_sprint_len(), 3);
        assert_eq!(plan.sprint_for_day(5), Some(2));
        assert_eq!(plan.sprint_for_day(9), Some(4));
        assert_eq!(plan.sprint_for_day(11), None);
    }

    #[test]
    fn test_even_split() {
        let plan = SprintPlan::for_duration(20);
        assert_eq!(plan.labels(), vec!["1-5", "6-10", "11-15", "16-20"]);
    }

    #[test]
    fn test_short_projects_have_empty_sprints() {
        let plan = SprintPlan::for_duration(1);
        assert_eq!(plan.labels(), vec!["1", "none", "none", "none"]);
        assert_eq!(plan.max_sprint_len(), 1);

        let plan = SprintPlan::for_duration(2);
        assert_eq!(plan.labels(), vec!["1", "none", "2", "none"]);

        let plan = SprintPlan::for_duration(3);
        assert_eq!(plan.labels(), vec!["1", "2", "3", "none"]);
    }

    #[test]
    fn test_plans_partition_the_project() {
        for d in 1..=30 {
            let plan = SprintPlan::for_duration(d);
            let total: u32 = plan.ranges().iter().map(DayRange::len).sum();
            assert_eq!(total, d, "duration {}", d);

            for day in 1..=d {
                let hits = plan.ranges().iter().filter(|r| r.contains(day)).count();
                assert_eq!(hits, 1, "day {} of {}", day, d);
            }

            let mut prev = 0;
            for r in plan.ranges().iter().filter(|r| !r.is_empty()) {
                assert_eq!(r.start, prev + 1);
                prev = r.end;
            }
            assert_eq!(prev, d);
        }
    }

    #[test]
    fn test_sprint_lookup() {
        let plan = SprintPlan::for_duration(10);
        assert_eq!(plan.sprint(1), Some(DayRange { start: 1, end: 3 }));
        assert_eq!(plan.sprint(0), None);
        assert_eq!(plan.sprint(5), None);
    }
}
