//! Metadata columns printed in front of each entry name
//!
//! Each getter works from an [`EntryMetadata`] and falls back to its own
//! fixed placeholder when the path could not be stat'ed, so one failing
//! column never affects the others.

use chrono::{DateTime, Datelike, Local};

use super::entry::EntryMetadata;

pub const OWNER_PLACEHOLDER: &str = "?";
pub const GROUP_PLACEHOLDER: &str = "???";
pub const PERMISSIONS_PLACEHOLDER: &str = "??????????";
pub const SIZE_PLACEHOLDER: &str = "?";
pub const DATE_PLACEHOLDER: &str = "??? ?? ?????";

/// Files older than this show a year instead of a time of day (182.5 days).
const RECENT_CUTOFF_MS: i64 = 182 * 24 * 60 * 60 * 1000 + 12 * 60 * 60 * 1000;

const SIZE_SUFFIXES: [&str; 6] = ["", "K", "M", "G", "T", "P"];

const S_IFMT: u32 = 0o170000;
const S_IFSOCK: u32 = 0o140000;
const S_IFLNK: u32 = 0o120000;
const S_IFREG: u32 = 0o100000;
const S_IFBLK: u32 = 0o060000;
const S_IFDIR: u32 = 0o040000;
const S_IFCHR: u32 = 0o020000;
const S_IFIFO: u32 = 0o010000;
const S_IFWHT: u32 = 0o160000;

const S_ISUID: u32 = 0o4000;
const S_ISGID: u32 = 0o2000;
const S_ISVTX: u32 = 0o1000;

/// `(read, write, execute, special, special char)` for owner, group, other.
const TRIPLES: [(u32, u32, u32, u32, char); 3] = [
    (0o400, 0o200, 0o100, S_ISUID, 's'),
    (0o040, 0o020, 0o010, S_ISGID, 's'),
    (0o004, 0o002, 0o001, S_ISVTX, 't'),
];

fn file_type_char(mode: u32) -> char {
    match mode & S_IFMT {
        S_IFREG => '-',
        S_IFBLK => 'b',
        S_IFCHR => 'c',
        S_IFDIR => 'd',
        S_IFLNK => 'l',
        S_IFIFO => 'p',
        S_IFSOCK => 's',
        S_IFWHT => 'w',
        _ => '?',
    }
}

/// `ls`-style permission string for a raw mode, e.g. `-rw-r--r--` or `drwxrwxr-x`.
pub fn permission_string(mode: u32) -> String {
    let mut chars = String::with_capacity(10);
    chars.push(file_type_char(mode));
    for (read, write, exe, special, special_chr) in TRIPLES {
        chars.push(if mode & read != 0 { 'r' } else { '-' });
        chars.push(if mode & write != 0 { 'w' } else { '-' });
        let has_exe = mode & exe != 0;
        let exe_chr = if mode & special != 0 {
            if has_exe {
                special_chr
            } else {
                special_chr.to_ascii_uppercase()
            }
        } else if has_exe {
            'x'
        } else {
            '-'
        };
        chars.push(exe_chr);
    }
    chars
}

pub fn permissions(meta: &EntryMetadata) -> String {
    meta.resolve(
        |s| permission_string(s.mode),
        PERMISSIONS_PLACEHOLDER.to_string(),
    )
}

/// Owner name, or the numeric uid when the account is unknown.
pub fn owner(meta: &EntryMetadata) -> String {
    meta.resolve(
        |s| {
            users::get_user_by_uid(s.uid)
                .map(|u| u.name().to_string_lossy().to_string())
                .unwrap_or_else(|| s.uid.to_string())
        },
        OWNER_PLACEHOLDER.to_string(),
    )
}

/// Group name, or the numeric gid when the group is unknown.
pub fn group(meta: &EntryMetadata) -> String {
    meta.resolve(
        |s| {
            users::get_group_by_gid(s.gid)
                .map(|g| g.name().to_string_lossy().to_string())
                .unwrap_or_else(|| s.gid.to_string())
        },
        GROUP_PLACEHOLDER.to_string(),
    )
}

pub fn size(meta: &EntryMetadata, nice: bool) -> String {
    meta.resolve(
        |s| {
            if nice {
                format_nice_size(s.size)
            } else {
                s.size.to_string()
            }
        },
        SIZE_PLACEHOLDER.to_string(),
    )
}

/// Human-readable size: scaled by 1024 while it stays at least 1, rounded to
/// two decimals. `53248` gives `52.0K`, `0` gives `0`.
pub fn format_nice_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0".to_string();
    }
    let mut value = bytes as f64;
    let mut index = 0;
    while value >= 1024.0 && index < SIZE_SUFFIXES.len() - 1 {
        value /= 1024.0;
        index += 1;
    }
    let rounded = (value * 100.0).round() / 100.0;
    // Debug keeps the trailing ".0" that Display drops
    format!("{:?}{}", rounded, SIZE_SUFFIXES[index])
}

pub fn date(meta: &EntryMetadata, now: DateTime<Local>) -> String {
    meta.resolve(
        |s| match s.mtime {
            Some(mtime) => format_date(DateTime::<Local>::from(mtime), now),
            None => DATE_PLACEHOLDER.to_string(),
        },
        DATE_PLACEHOLDER.to_string(),
    )
}

/// `Mon dd HH:MM` for recent dates, `Mon dd  YYYY` for old or future ones.
pub fn format_date(date: DateTime<Local>, now: DateTime<Local>) -> String {
    let age_ms = (now - date).num_milliseconds();
    let suffix = if age_ms > 0 && age_ms < RECENT_CUTOFF_MS {
        date.format("%H:%M").to_string()
    } else {
        format!("{:>5}", date.year())
    };
    format!("{} {:>2} {}", date.format("%b"), date.day(), suffix)
}

/// Sort key for `-t`: seconds since the epoch, `+inf` when unknown.
pub fn mtime_key(meta: &EntryMetadata) -> f64 {
    meta.resolve(
        |s| {
            s.mtime
                .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
                .map_or(f64::INFINITY, |d| d.as_secs_f64())
        },
        f64::INFINITY,
    )
}
