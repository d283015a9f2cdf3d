#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// CSV fixture in the temp directory, removed when dropped.
pub struct TempCsv(PathBuf);

impl TempCsv {
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempCsv {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

/// Write `contents` to a fresh file in the temp directory.
pub fn write_csv(contents: &str) -> TempCsv {
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "student_insight_it_{}_{}.csv",
        std::process::id(),
        id
    ));
    std::fs::write(&path, contents).expect("write fixture");
    TempCsv(path)
}

pub const HEADER: &str =
    "StudentID,Name,Age,Gender,Class,Math,English,Science,Attendance,PreviousGrade,FinalGrade";

/// Full roster of `n` students; FinalGrade is a linear function of the features.
pub fn roster(n: usize) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for i in 0..n {
        let math = 50 + (i * 7) % 50;
        let english = 55 + (i * 11) % 45;
        let science = 40 + (i * 13) % 60;
        let attendance = 70 + (i * 3) % 30;
        let final_grade = 5.0
            + 0.3 * math as f64
            + 0.25 * english as f64
            + 0.2 * science as f64
            + 0.1 * attendance as f64;
        out.push_str(&format!(
            "{},Student{},{},{},{},{},{},{},{},{},{:.4}\n",
            i + 1,
            i + 1,
            15 + i % 4,
            if i % 2 == 0 { "F" } else { "M" },
            10 + i % 3,
            math,
            english,
            science,
            attendance,
            60 + i % 35,
            final_grade
        ));
    }
    out
}

/// Roster with one column removed.
pub fn roster_without(n: usize, column: &str) -> String {
    let full = roster(n);
    let mut lines = full.lines();
    let header: Vec<&str> = lines.next().unwrap_or_default().split(',').collect();
    let drop = header.iter().position(|h| *h == column).expect("column in header");

    let keep = |line: &str| -> String {
        line.split(',')
            .enumerate()
            .filter(|(i, _)| *i != drop)
            .map(|(_, v)| v)
            .collect::<Vec<_>>()
            .join(",")
    };

    let mut out = keep(&header.join(","));
    out.push('\n');
    for line in lines {
        out.push_str(&keep(line));
        out.push('\n');
    }
    out
}
