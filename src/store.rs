use uuid::Uuid;

use crate::filter::{derive, Filter, Filterable};
use crate::model::{
    AttendanceRecord, ChildProfile, FeePayment, MediaItem, PaymentInstructions, Student,
    UploadedFile,
};
use crate::seed;

pub trait Record {
    fn id(&self) -> &str;
}

pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Monotonic decimal ids, continuing after the highest numeric seed id.
#[derive(Debug, Clone)]
pub struct CounterIds {
    next: u64,
}

impl CounterIds {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    pub fn after<T: Record>(rows: &[T]) -> Self {
        let max = rows
            .iter()
            .filter_map(|r| r.id().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self::starting_at(max + 1)
    }
}

impl IdGenerator for CounterIds {
    fn next_id(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// One entity kind held in memory for the session. Row order is display order.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: Vec<T>,
}

impl<T: Record> Table<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self { rows }
    }

    pub fn all(&self) -> &[T] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.rows.iter().find(|r| r.id() == id)
    }

    pub fn query(&self, filter: &Filter) -> Vec<&T>
    where
        T: Filterable,
    {
        derive(&self.rows, filter)
    }

    /// Applies `patch` to the row with `id`, leaving every other row untouched.
    pub fn update(&mut self, id: &str, patch: impl FnOnce(&mut T)) -> Option<&T> {
        let row = self.rows.iter_mut().find(|r| r.id() == id)?;
        patch(row);
        Some(row)
    }

    pub fn prepend(&mut self, row: T) {
        self.rows.insert(0, row);
    }

    pub fn remove(&mut self, id: &str) -> Option<T> {
        let idx = self.rows.iter().position(|r| r.id() == id)?;
        Some(self.rows.remove(idx))
    }
}

/// Everything the dashboards show, seeded at start-up and dropped on exit.
pub struct SchoolStore {
    pub classes: Vec<&'static str>,
    pub students: Table<Student>,
    pub uploads: Table<UploadedFile>,
    pub gallery: Table<MediaItem>,
    pub child: ChildProfile,
    pub child_attendance: Vec<AttendanceRecord>,
    pub child_payments: Vec<FeePayment>,
    pub payment_instructions: PaymentInstructions,
}

impl SchoolStore {
    pub fn seeded() -> Self {
        Self {
            classes: seed::classes(),
            students: Table::new(seed::students()),
            uploads: Table::new(seed::uploaded_files()),
            gallery: Table::new(seed::gallery_items()),
            child: seed::child_profile(),
            child_attendance: seed::child_attendance(),
            child_payments: seed::payment_history(),
            payment_instructions: seed::PAYMENT_INSTRUCTIONS,
        }
    }

    pub fn fee_students(&self, filter: &Filter) -> Vec<&Student> {
        self.students
            .query(filter)
            .into_iter()
            .filter(|s| s.fee.is_some())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MediaKind, UploadedFile};
    use chrono::NaiveDate;

    fn file(id: &str, name: &str) -> UploadedFile {
        UploadedFile {
            id: id.to_string(),
            name: name.to_string(),
            kind: MediaKind::Image,
            size_label: "1.0 MB".to_string(),
            upload_date: NaiveDate::from_ymd_opt(2024, 1, 10).expect("date"),
            description: String::new(),
        }
    }

    #[test]
    fn prepend_puts_new_row_first_and_grows_by_one() {
        let mut t = Table::new(vec![file("1", "a.jpg"), file("2", "b.jpg")]);
        t.prepend(file("3", "c.jpg"));
        assert_eq!(t.len(), 3);
        assert_eq!(t.all()[0].id, "3");
        assert_eq!(t.all()[1].id, "1");
    }

    #[test]
    fn remove_drops_exactly_one_row() {
        let mut t = Table::new(vec![file("1", "a.jpg"), file("2", "b.jpg"), file("3", "c.jpg")]);
        let before: Vec<UploadedFile> = t.all().to_vec();
        let removed = t.remove("2").expect("removed");
        assert_eq!(removed.name, "b.jpg");
        assert_eq!(t.len(), 2);
        assert_eq!(t.all()[0], before[0]);
        assert_eq!(t.all()[1], before[2]);
        assert!(t.remove("2").is_none());
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn update_touches_only_the_target_row() {
        let mut t = Table::new(vec![file("1", "a.jpg"), file("2", "b.jpg")]);
        let updated = t
            .update("2", |f| f.description = "changed".to_string())
            .expect("row");
        assert_eq!(updated.description, "changed");
        assert_eq!(t.find("1").expect("row 1").description, "");
        assert!(t.update("9", |f| f.description = "x".to_string()).is_none());
    }

    #[test]
    fn counter_ids_continue_after_numeric_seed_ids() {
        let rows = vec![file("1", "a"), file("7", "b"), file("not-a-number", "c")];
        let mut ids = CounterIds::after(&rows);
        assert_eq!(ids.next_id(), "8");
        assert_eq!(ids.next_id(), "9");
    }

    #[test]
    fn uuid_ids_are_unique() {
        let mut ids = UuidIds;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }

    #[test]
    fn seeded_fee_students_skip_students_without_accounts() {
        let store = SchoolStore::seeded();
        assert_eq!(store.students.len(), 5);
        let fee = store.fee_students(&Filter::default());
        let names: Vec<&str> = fee.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Rahul Sharma", "Priya Patel", "Amit Kumar"]);
    }
}
