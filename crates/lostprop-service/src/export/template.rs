//! Wording and layout of exported documents.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Offset, Timelike, Utc};

use lostprop_core::config::OfficeConfig;
use lostprop_entity::report::Report;

use super::document::{Align, Document};

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// `16 Oktober 2026`
pub fn indonesian_date(date: NaiveDate) -> String {
    let month = MONTHS[date.month0() as usize];
    format!("{:02} {} {}", date.day(), month, date.year())
}

/// `16 Oktober 2026, 09:30`
pub fn indonesian_datetime<Tz: chrono::TimeZone>(at: &DateTime<Tz>) -> String {
    let local = at.naive_local();
    format!(
        "{}, {:02}:{:02}",
        indonesian_date(local.date()),
        local.hour(),
        local.minute()
    )
}

/// `16102026`, used in export filenames.
pub fn compact_date(date: NaiveDate) -> String {
    date.format("%d%m%Y").to_string()
}

/// Fixed-offset zone of the office.
pub fn office_zone(office: &OfficeConfig) -> FixedOffset {
    FixedOffset::east_opt(office.utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix())
}

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn sex_label(code: &str) -> String {
    match code.trim().to_lowercase().as_str() {
        "l" => "Laki-laki".to_string(),
        "p" => "Perempuan".to_string(),
        other => or_dash(other),
    }
}

fn letterhead(doc: &mut Document, office: &OfficeConfig) {
    for (i, line) in office.letterhead.iter().enumerate() {
        let size = if i == 0 { 13.0 } else { 11.5 };
        doc.text(line, size, true, Align::Center);
    }
    doc.space(4.0);
    doc.rule(1.2);
    doc.space(8.0);
}

/// Receipt certificate for a single report.
pub fn certificate(report: &Report, office: &OfficeConfig, now: DateTime<Utc>) -> Document {
    let zone = office_zone(office);
    let mut doc = Document::new(format!("{} {}", office.certificate_title, report.id));

    letterhead(&mut doc, office);
    doc.text(&office.certificate_title, 12.0, true, Align::Center);
    doc.space(10.0);

    doc.heading("Informasi Dasar");
    doc.field("ID Laporan", report.id.to_string());
    doc.field(
        "Tanggal Laporan",
        indonesian_datetime(&report.report_date.with_timezone(&zone)),
    );

    doc.heading("Informasi Pelapor");
    doc.field("Nama", or_dash(&report.name));
    doc.field("NIK", or_dash(&report.national_id));
    let birth = match report.birth_date {
        Some(date) => format!("{}, {}", or_dash(&report.birth_place), indonesian_date(date)),
        None => or_dash(&report.birth_place),
    };
    doc.field("Tempat/Tanggal Lahir", birth);
    doc.field("Jenis Kelamin", sex_label(&report.sex));
    doc.field("Agama", or_dash(&report.religion));
    doc.field("Pekerjaan", or_dash(&report.occupation));
    doc.field("Alamat", or_dash(&report.address));

    doc.heading("Barang yang Hilang");
    let rows = report
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            vec![
                (i + 1).to_string(),
                item.type_label().to_string(),
                item.quantity_label(),
                or_dash(&item.note),
            ]
        })
        .collect();
    doc.table(
        &["No", "Jenis", "Jumlah", "Keterangan"],
        &[0.08, 0.37, 0.2, 0.35],
        rows,
        "Tidak ada data",
    );

    doc.heading("Informasi Kehilangan");
    let lost_at = report
        .lost_at
        .map(|at| indonesian_date(at.with_timezone(&zone).date_naive()))
        .unwrap_or_else(|| "-".to_string());
    doc.field("Waktu Kehilangan", lost_at);
    doc.field("Lokasi Kehilangan", or_dash(&report.full_location()));

    doc.heading("Status Laporan");
    doc.field("Status", report.status.as_str().to_uppercase());
    if let Some(note) = report.admin_note.as_deref().filter(|n| !n.trim().is_empty()) {
        doc.field("Catatan Admin", note);
    }

    doc.space(28.0);
    let today = indonesian_date(now.with_timezone(&zone).date_naive());
    doc.text(format!("{}, {}", office.city, today), 10.0, false, Align::Right);
    doc.space(56.0);
    doc.text("(_______________________)", 10.0, false, Align::Right);
    doc.text("Petugas yang Menangani", 10.0, false, Align::Right);

    if !report.attachments().is_empty() {
        doc.page_break();
        doc.heading("Lampiran");
        let rows = report
            .attachments()
            .iter()
            .enumerate()
            .map(|(i, a)| {
                let size = a
                    .decode()
                    .map(|bytes| format!("{:.1} KB", bytes.len() as f64 / 1024.0))
                    .unwrap_or_else(|_| "-".to_string());
                vec![(i + 1).to_string(), a.name.clone(), a.content_type.clone(), size]
            })
            .collect();
        doc.table(
            &["No", "Nama File", "Jenis", "Ukuran"],
            &[0.08, 0.5, 0.24, 0.18],
            rows,
            "Tidak ada data",
        );
    }

    doc
}

/// Register of many reports, one row each.
pub fn register(reports: &[Report], office: &OfficeConfig, now: DateTime<Utc>) -> Document {
    let zone = office_zone(office);
    let mut doc = Document::new("Semua Laporan Kehilangan");

    letterhead(&mut doc, office);
    doc.text("DAFTAR LAPORAN KEHILANGAN", 12.0, true, Align::Center);
    doc.text(
        format!(
            "Dicetak {} - {} laporan",
            indonesian_datetime(&now.with_timezone(&zone)),
            reports.len()
        ),
        9.0,
        false,
        Align::Center,
    );
    doc.space(10.0);

    let rows = reports
        .iter()
        .map(|r| {
            let items = r
                .items()
                .iter()
                .map(|i| i.type_label().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            vec![
                r.id.to_string(),
                indonesian_date(r.report_date.with_timezone(&zone).date_naive()),
                r.name.clone(),
                r.national_id.clone(),
                or_dash(&items),
                r.status.label().to_string(),
            ]
        })
        .collect();
    doc.table(
        &["ID Laporan", "Tanggal", "Nama", "NIK", "Items", "Status"],
        &[0.27, 0.14, 0.17, 0.17, 0.14, 0.11],
        rows,
        "Tidak ada data",
    );
    doc
}
