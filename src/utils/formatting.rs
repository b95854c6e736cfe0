use time::macros::format_description;
use time::OffsetDateTime;

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const MAX_NAME_LEN: usize = 40;

/// Human file size: `512 B`, `840 KB`, `1.5 MB`.
pub fn format_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{} KB", (bytes + KIB / 2) / KIB)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}

/// `HH:MM` wall-clock time for chat bubbles.
pub fn format_clock(timestamp: OffsetDateTime) -> String {
    timestamp
        .format(format_description!("[hour]:[minute]"))
        .unwrap_or_default()
}

/// Shorten long file names for cards, keeping the extension visible.
pub fn truncate_name(name: &str) -> String {
    if name.chars().count() <= MAX_NAME_LEN {
        return name.to_string();
    }

    let (stem, extension) = match name.rsplit_once('.') {
        Some((stem, ext)) if ext.len() <= 5 => (stem, Some(ext)),
        _ => (name, None),
    };
    let keep = MAX_NAME_LEN - extension.map_or(0, |ext| ext.chars().count() + 1) - 1;
    let mut shortened: String = stem.chars().take(keep).collect();
    shortened.push('…');
    if let Some(ext) = extension {
        shortened.push('.');
        shortened.push_str(ext);
    }
    shortened
}

#[cfg(test)]
#[path = "formatting_test.rs"]
mod tests;
