//! Small string, list and map helpers.

use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;
use std::num::ParseIntError;

/// Strings treated as "no value" by [`is_null_str`].
const NULL_STRINGS: &[&str] = &["", "nan", "NaN", "None", "NONE", "N/A", "#N/A"];

/// Quote character used by [`quotify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quote {
    #[default]
    Single,
    Double,
}

impl Quote {
    fn as_char(self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
        }
    }
}

/// Split a comma-separated string into trimmed items.
pub fn split_list(s: &str) -> Vec<String> {
    s.split(',').map(|item| item.trim().to_string()).collect()
}

/// Join items with `sep`, placing `last_sep` before the final item.
///
/// `["a", "b", "c"]` becomes `a, b and c`; two items become `a and b`.
pub fn comma_and<S: AsRef<str>>(items: &[S], sep: &str, last_sep: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} {} {}", first.as_ref(), last_sep, second.as_ref()),
        [head @ .., last] => {
            let head: Vec<&str> = head.iter().map(|s| s.as_ref()).collect();
            format!("{} {} {}", head.join(sep), last_sep, last.as_ref())
        }
    }
}

/// Quote each item and join with `, `.
pub fn quotify<S: AsRef<str>>(items: &[S], quote: Quote) -> String {
    let q = quote.as_char();
    items
        .iter()
        .map(|item| format!("{q}{}{q}", item.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Split `items` into consecutive chunks of `size` (the last may be shorter).
///
/// A size of 0 is treated as 1.
pub fn chunkify<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    items.chunks(size.max(1)).map(<[T]>::to_vec).collect()
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 21st, 112th.
///
/// The suffix comes from the floored remainder, so `-1` is `-1th` and `-9`
/// is `-9st`.
pub fn ordinal(n: i64) -> String {
    let suffix = if (11..=13).contains(&n.rem_euclid(100)) {
        "th"
    } else {
        match n.rem_euclid(10) {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{}{}", n, suffix)
}

/// Remove every occurrence of each needle.
pub fn remove<S: AsRef<str>>(text: &str, needles: &[S]) -> String {
    needles
        .iter()
        .filter(|n| !n.as_ref().is_empty())
        .fold(text.to_string(), |acc, n| acc.replace(n.as_ref(), ""))
}

/// Apply each `(from, to)` replacement in order.
pub fn replace_all<S: AsRef<str>>(text: &str, pairs: &[(S, S)]) -> String {
    pairs
        .iter()
        .filter(|(from, _)| !from.as_ref().is_empty())
        .fold(text.to_string(), |acc, (from, to)| {
            acc.replace(from.as_ref(), to.as_ref())
        })
}

/// Items of `a` also present in `b`, in `a`'s order, without duplicates.
pub fn find_common<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let other: HashSet<&T> = b.iter().collect();
    dedup_in_order(a.iter().filter(|item| other.contains(item)))
}

/// Items of `a` absent from `b`, in `a`'s order, without duplicates.
pub fn find_uncommon<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let other: HashSet<&T> = b.iter().collect();
    dedup_in_order(a.iter().filter(|item| !other.contains(item)))
}

fn dedup_in_order<'a, T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone + 'a,
    I: Iterator<Item = &'a T>,
{
    let mut seen = HashSet::new();
    items
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Number the non-empty items from 1.
pub fn numbered<S: AsRef<str>>(items: &[S]) -> BTreeMap<usize, String> {
    items
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(i, s)| (i + 1, s.to_string()))
        .collect()
}

/// Invert a map: each value points at the sorted keys that held it.
pub fn reverse_map<K, V>(map: &BTreeMap<K, V>) -> BTreeMap<V, Vec<K>>
where
    K: Ord + Clone,
    V: Ord + Clone,
{
    let mut reversed: BTreeMap<V, Vec<K>> = BTreeMap::new();
    for (k, v) in map {
        reversed.entry(v.clone()).or_default().push(k.clone());
    }
    reversed
}

/// Keep entries whose key is in `keys`.
///
/// With `exact == false` a key is kept when any of `keys` is a substring
/// of it.
pub fn keep_keys<V: Clone, S: AsRef<str>>(
    map: &BTreeMap<String, V>,
    keys: &[S],
    exact: bool,
) -> BTreeMap<String, V> {
    map.iter()
        .filter(|(k, _)| {
            keys.iter().any(|wanted| {
                if exact {
                    k.as_str() == wanted.as_ref()
                } else {
                    k.contains(wanted.as_ref())
                }
            })
        })
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// True for blank or placeholder strings like `N/A` and `NaN`.
pub fn is_null_str(s: &str) -> bool {
    let s = s.trim();
    NULL_STRINGS.iter().any(|null| *null == s)
}

/// `""` for null-like strings, the input otherwise.
pub fn blank_null(s: &str) -> &str {
    if is_null_str(s) {
        ""
    } else {
        s
    }
}

/// True when the string is numeric once every `.` is removed.
///
/// The number of points is not checked: `1.2.3` passes, `-1` and `.` do not.
pub fn is_float(s: &str) -> bool {
    let mut rest = s.chars().filter(|&c| c != '.').peekable();
    rest.peek().is_some() && rest.all(char::is_numeric)
}

/// Value for `key`, or `default` when it is missing, empty or null-like.
pub fn dget<'a, S: AsRef<str>>(
    map: &'a BTreeMap<String, S>,
    key: &str,
    default: &'a str,
) -> &'a str {
    match map.get(key).map(|v| v.as_ref()) {
        Some(value) if !is_null_str(value) => value,
        _ => default,
    }
}

fn parse_int(s: &str) -> Result<i64, ParseIntError> {
    s.trim().replace(',', "").parse()
}

/// Odd check on a number string; thousands separators are ignored.
pub fn is_odd(s: &str) -> Result<bool, ParseIntError> {
    parse_int(s).map(|n| n % 2 != 0)
}

/// Even check on a number string; thousands separators are ignored.
pub fn is_even(s: &str) -> Result<bool, ParseIntError> {
    parse_int(s).map(|n| n % 2 == 0)
}
