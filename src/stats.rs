use chrono::NaiveDate;

use crate::model::{AttendanceRecord, AttendanceStatus, FeeStatus, MediaItem, Student};

pub const LOW_ATTENDANCE_PERCENT: u32 = 75;
pub const URGENT_DUE_DAYS: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub total: usize,
    pub present: usize,
    pub late: usize,
    pub absent: usize,
    pub percentage: u32,
    pub low_attendance: bool,
}

/// Late days count as attended.
pub fn attendance_summary(records: &[AttendanceRecord]) -> AttendanceSummary {
    let count = |status: AttendanceStatus| records.iter().filter(|r| r.status == status).count();
    let present = count(AttendanceStatus::Present);
    let late = count(AttendanceStatus::Late);
    let absent = count(AttendanceStatus::Absent);
    let total = records.len();
    let percentage = rounded_percent((present + late) as f64, total as f64);
    AttendanceSummary {
        total,
        present,
        late,
        absent,
        percentage,
        low_attendance: total > 0 && percentage < LOW_ATTENDANCE_PERCENT,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeeSummary {
    pub collected: i64,
    pub pending: i64,
    pub overdue: usize,
}

pub fn fee_summary<'a, I>(students: I) -> FeeSummary
where
    I: IntoIterator<Item = &'a Student>,
{
    students
        .into_iter()
        .filter_map(|s| s.fee.as_ref())
        .fold(FeeSummary::default(), |mut acc, f| {
            acc.collected += f.paid;
            acc.pending += f.pending;
            if f.status == FeeStatus::Overdue {
                acc.overdue += 1;
            }
            acc
        })
}

pub fn paid_percent(total: i64, pending: i64) -> u32 {
    rounded_percent((total - pending) as f64, total as f64)
}

/// Whole days from `today` until `due`; negative once the date has passed.
pub fn days_until(today: NaiveDate, due: NaiveDate) -> i64 {
    (due - today).num_days()
}

fn rounded_percent(part: f64, whole: f64) -> u32 {
    if whole <= 0.0 {
        return 0;
    }
    (100.0 * part / whole).round().clamp(0.0, 100.0) as u32
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub id: &'static str,
    pub name: &'static str,
    pub count: usize,
}

/// Gallery filter chips. Items in categories without a chip show under "all" only.
pub const GALLERY_CATEGORIES: [(&str, &str); 6] = [
    ("all", "All"),
    ("sports", "Sports"),
    ("academic", "Academic"),
    ("cultural", "Cultural"),
    ("ceremony", "Ceremonies"),
    ("educational", "Educational"),
];

pub fn gallery_categories(items: &[MediaItem]) -> Vec<CategoryCount> {
    GALLERY_CATEGORIES
        .iter()
        .map(|&(id, name)| CategoryCount {
            id,
            name,
            count: if id == "all" {
                items.len()
            } else {
                items.iter().filter(|m| m.category == id).count()
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).expect("date")
    }

    #[test]
    fn seed_attendance_summary_counts_late_as_attended() {
        let s = attendance_summary(&seed::child_attendance());
        assert_eq!(s.total, 8);
        assert_eq!(s.present, 6);
        assert_eq!(s.late, 1);
        assert_eq!(s.absent, 1);
        assert_eq!(s.percentage, 88);
        assert!(!s.low_attendance);
    }

    #[test]
    fn low_attendance_flag_below_threshold() {
        let records: Vec<AttendanceRecord> = [
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::Absent,
            AttendanceStatus::Late,
        ]
        .into_iter()
        .enumerate()
        .map(|(i, status)| AttendanceRecord {
            date: day(i as u32 + 1),
            status,
        })
        .collect();
        let s = attendance_summary(&records);
        assert_eq!(s.percentage, 50);
        assert!(s.low_attendance);
    }

    #[test]
    fn empty_attendance_is_zero_without_alert() {
        let s = attendance_summary(&[]);
        assert_eq!(s.percentage, 0);
        assert!(!s.low_attendance);
    }

    #[test]
    fn fee_summary_over_seed_students() {
        let students = seed::students();
        let s = fee_summary(&students);
        assert_eq!(s.collected, 37500);
        assert_eq!(s.pending, 7500);
        assert_eq!(s.overdue, 1);
    }

    #[test]
    fn paid_percent_handles_zero_total() {
        assert_eq!(paid_percent(15000, 2500), 83);
        assert_eq!(paid_percent(0, 0), 0);
    }

    #[test]
    fn days_until_counts_whole_days() {
        assert_eq!(days_until(day(15), day(17)), 2);
        assert_eq!(days_until(day(17), day(15)), -2);
    }

    #[test]
    fn gallery_categories_count_seed_items() {
        let cats = gallery_categories(&seed::gallery_items());
        let counts: Vec<(&str, usize)> = cats.iter().map(|c| (c.id, c.count)).collect();
        assert_eq!(
            counts,
            vec![
                ("all", 6),
                ("sports", 1),
                ("academic", 1),
                ("cultural", 1),
                ("ceremony", 1),
                ("educational", 1)
            ]
        );
    }
}
