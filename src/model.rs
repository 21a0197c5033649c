use chrono::NaiveDate;

use crate::filter::Filterable;
use crate::store::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "present" => Some(Self::Present),
            "absent" => Some(Self::Absent),
            "late" => Some(Self::Late),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Late => "late",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeStatus {
    Paid,
    Pending,
    Overdue,
}

impl FeeStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "paid" => Some(Self::Paid),
            "pending" => Some(Self::Pending),
            "overdue" => Some(Self::Overdue),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Overdue => "overdue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum PaymentStatus {
    Completed,
    Pending,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Anything that is not an `image/*` MIME type is treated as video.
    pub fn from_mime(mime: &str) -> Self {
        if mime.trim().to_ascii_lowercase().starts_with("image/") {
            Self::Image
        } else {
            Self::Video
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeeAccount {
    pub total: i64,
    pub paid: i64,
    pub pending: i64,
    pub due_date: NaiveDate,
    pub status: FeeStatus,
    pub registration_date: NaiveDate,
}

impl FeeAccount {
    pub fn apply_status(&mut self, status: FeeStatus) {
        self.status = status;
        if status == FeeStatus::Paid {
            self.paid = self.total;
            self.pending = 0;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub roll_number: String,
    pub class_id: String,
    pub status: AttendanceStatus,
    pub fee: Option<FeeAccount>,
}

impl Record for Student {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Filterable for Student {
    fn class_id(&self) -> Option<&str> {
        Some(self.class_id.as_str())
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.roll_number.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeePayment {
    pub date: NaiveDate,
    pub amount: i64,
    pub method: String,
    pub status: PaymentStatus,
    pub receipt_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MediaAssets {
    Images(Vec<String>),
    Video(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub id: String,
    pub title: String,
    pub kind: MediaKind,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
    pub thumbnail: String,
    pub assets: MediaAssets,
}

impl Record for MediaItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Filterable for MediaItem {
    fn category(&self) -> Option<&str> {
        Some(self.category.as_str())
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub id: String,
    pub name: String,
    pub kind: MediaKind,
    pub size_label: String,
    pub upload_date: NaiveDate,
    pub description: String,
}

impl Record for UploadedFile {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Filterable for UploadedFile {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

/// The parent's child as shown on the parent dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildProfile {
    pub student_id: String,
    pub name: String,
    pub class_id: String,
    pub roll_number: String,
    pub total_fees: i64,
    pub pending_fees: i64,
    pub upcoming_due_date: NaiveDate,
    pub gallery_updates: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentInstructions {
    pub upi_id: &'static str,
    pub account_number: &'static str,
    pub ifsc: &'static str,
    pub bank: &'static str,
}

/// Size label in megabytes with one decimal, e.g. `2.5 MB`.
pub fn megabytes_label(size_bytes: u64) -> String {
    format!("{:.1} MB", size_bytes as f64 / (1024.0 * 1024.0))
}
