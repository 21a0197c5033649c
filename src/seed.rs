use chrono::NaiveDate;

use crate::model::{
    AttendanceRecord, AttendanceStatus, ChildProfile, FeeAccount, FeePayment, FeeStatus,
    MediaAssets, MediaItem, MediaKind, PaymentInstructions, PaymentStatus, Student, UploadedFile,
};

pub const PAYMENT_INSTRUCTIONS: PaymentInstructions = PaymentInstructions {
    upi_id: "school@paytm",
    account_number: "1234567890",
    ifsc: "SBIN0001234",
    bank: "State Bank of India",
};

const THUMBNAIL: &str = "/api/placeholder/300/200";
const FULL_IMAGE: &str = "/api/placeholder/800/600";
const VIDEO: &str = "/api/placeholder/video";

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn classes() -> Vec<&'static str> {
    vec!["1A", "1B", "2A", "2B", "3A", "3B", "4A", "4B", "5A", "5B"]
}

fn fee(total: i64, paid: i64, due: NaiveDate, status: FeeStatus, registered: NaiveDate) -> FeeAccount {
    FeeAccount {
        total,
        paid,
        pending: total - paid,
        due_date: due,
        status,
        registration_date: registered,
    }
}

fn student(
    id: &str,
    name: &str,
    roll_number: &str,
    class_id: &str,
    status: AttendanceStatus,
    fee: Option<FeeAccount>,
) -> Student {
    Student {
        id: id.to_string(),
        name: name.to_string(),
        roll_number: roll_number.to_string(),
        class_id: class_id.to_string(),
        status,
        fee,
    }
}

pub fn students() -> Vec<Student> {
    use AttendanceStatus::*;
    vec![
        student(
            "1",
            "Rahul Sharma",
            "23",
            "5A",
            Present,
            Some(fee(15000, 12500, ymd(2024, 1, 15), FeeStatus::Pending, ymd(2023, 4, 15))),
        ),
        student(
            "2",
            "Priya Patel",
            "24",
            "5A",
            Present,
            Some(fee(15000, 15000, ymd(2024, 1, 15), FeeStatus::Paid, ymd(2023, 4, 20))),
        ),
        student(
            "3",
            "Amit Kumar",
            "25",
            "5A",
            Absent,
            Some(fee(15000, 10000, ymd(2024, 1, 10), FeeStatus::Overdue, ymd(2023, 4, 18))),
        ),
        student("4", "Sneha Singh", "26", "5B", Present, None),
        student("5", "Arjun Reddy", "27", "5B", Late, None),
    ]
}

fn upload(id: &str, name: &str, kind: MediaKind, size: &str, date: NaiveDate, description: &str) -> UploadedFile {
    UploadedFile {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        size_label: size.to_string(),
        upload_date: date,
        description: description.to_string(),
    }
}

pub fn uploaded_files() -> Vec<UploadedFile> {
    vec![
        upload(
            "1",
            "sports-day-2024.jpg",
            MediaKind::Image,
            "2.5 MB",
            ymd(2024, 1, 10),
            "Annual sports day celebration",
        ),
        upload(
            "2",
            "graduation-ceremony.mp4",
            MediaKind::Video,
            "15.2 MB",
            ymd(2024, 1, 8),
            "Grade 5 graduation ceremony",
        ),
        upload(
            "3",
            "science-fair.jpg",
            MediaKind::Image,
            "1.8 MB",
            ymd(2024, 1, 5),
            "Students presenting science projects",
        ),
    ]
}

fn photos(n: usize) -> MediaAssets {
    MediaAssets::Images(vec![FULL_IMAGE.to_string(); n])
}

fn gallery_item(
    id: &str,
    title: &str,
    category: &str,
    date: NaiveDate,
    description: &str,
    assets: MediaAssets,
) -> MediaItem {
    let kind = match assets {
        MediaAssets::Images(_) => MediaKind::Image,
        MediaAssets::Video(_) => MediaKind::Video,
    };
    MediaItem {
        id: id.to_string(),
        title: title.to_string(),
        kind,
        category: category.to_string(),
        date,
        description: description.to_string(),
        thumbnail: THUMBNAIL.to_string(),
        assets,
    }
}

pub fn gallery_items() -> Vec<MediaItem> {
    vec![
        gallery_item(
            "1",
            "Annual Sports Day 2024",
            "sports",
            ymd(2024, 1, 10),
            "Students participating in various sports activities during the annual sports day celebration.",
            photos(3),
        ),
        gallery_item(
            "2",
            "Science Fair Exhibition",
            "academic",
            ymd(2024, 1, 5),
            "Students showcasing their innovative science projects and experiments.",
            photos(2),
        ),
        gallery_item(
            "3",
            "Cultural Program",
            "cultural",
            ymd(2023, 12, 20),
            "Annual cultural program featuring dance, music, and drama performances.",
            MediaAssets::Video(VIDEO.to_string()),
        ),
        gallery_item(
            "4",
            "Grade 5 Graduation",
            "ceremony",
            ymd(2023, 12, 15),
            "Graduation ceremony for Grade 5 students moving to middle school.",
            photos(4),
        ),
        gallery_item(
            "5",
            "Field Trip to Museum",
            "educational",
            ymd(2023, 12, 10),
            "Educational field trip to the city museum for history and science learning.",
            photos(2),
        ),
        gallery_item(
            "6",
            "Parent-Teacher Meeting",
            "meeting",
            ymd(2023, 12, 5),
            "Highlights from the monthly parent-teacher interaction session.",
            MediaAssets::Video(VIDEO.to_string()),
        ),
    ]
}

pub fn child_profile() -> ChildProfile {
    ChildProfile {
        student_id: "1".to_string(),
        name: "Rahul Sharma".to_string(),
        class_id: "5A".to_string(),
        roll_number: "23".to_string(),
        total_fees: 15000,
        pending_fees: 2500,
        upcoming_due_date: ymd(2024, 1, 17),
        gallery_updates: 12,
    }
}

pub fn child_attendance() -> Vec<AttendanceRecord> {
    use AttendanceStatus::*;
    [
        (15, Present),
        (14, Present),
        (13, Absent),
        (12, Present),
        (11, Present),
        (10, Late),
        (9, Present),
        (8, Present),
    ]
    .into_iter()
    .map(|(day, status)| AttendanceRecord {
        date: ymd(2024, 1, day),
        status,
    })
    .collect()
}

pub fn payment_history() -> Vec<FeePayment> {
    [
        ((2023, 12), "UPI", "RCP001"),
        ((2023, 11), "Bank Transfer", "RCP002"),
        ((2023, 10), "UPI", "RCP003"),
        ((2023, 9), "Cash", "RCP004"),
        ((2023, 8), "UPI", "RCP005"),
    ]
    .into_iter()
    .map(|((y, m), method, receipt)| FeePayment {
        date: ymd(y, m, 15),
        amount: 2500,
        method: method.to_string(),
        status: PaymentStatus::Completed,
        receipt_id: receipt.to_string(),
    })
    .collect()
}
