use std::iter;

use log::{debug, trace};
use thiserror::Error;

use super::z::{z_capped, z_linear};

/// バイト列の検索で慣例的に使う番兵
pub const DEFAULT_SENTINEL: u8 = b'$';

/// 番兵が検索対象に含まれていた
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SentinelError {
    #[error("sentinel occurs in the pattern at position {position}")]
    InPattern { position: usize },
    #[error("sentinel occurs in the text at position {position}")]
    InText { position: usize },
}

/// 番兵を挟んで`pattern`と`text`を連結し, `text`中の`pattern`の出現位置を昇順に返す
///
/// `sentinel`が`pattern`または`text`に含まれる場合は[`SentinelError`]を返す.
/// `pattern`が空なら`0..=text.len()`の全ての位置を返す.
///
/// # Time complexity
///
/// - *O*(*M* + *N*)
pub fn search_with_sentinel<T: Eq>(
    pattern: &[T],
    text: &[T],
    sentinel: &T,
) -> Result<Vec<usize>, SentinelError> {
    if let Some(position) = pattern.iter().position(|c| c == sentinel) {
        debug!("rejecting sentinel: found in pattern at {position}");
        return Err(SentinelError::InPattern { position });
    }
    if let Some(position) = text.iter().position(|c| c == sentinel) {
        debug!("rejecting sentinel: found in text at {position}");
        return Err(SentinelError::InText { position });
    }
    let m = pattern.len();
    if m == 0 {
        return Ok((0..=text.len()).collect());
    }

    let composite: Vec<&T> = pattern
        .iter()
        .chain(iter::once(sentinel))
        .chain(text)
        .collect();
    let z = z_linear(&composite);
    let occurrences: Vec<usize> = z
        .iter()
        .enumerate()
        .skip(m + 1)
        .filter(|&(_, &len)| len == m)
        .map(|(i, _)| i - m - 1)
        .collect();
    trace!(
        "sentinel search: pattern {m}, text {}, {} occurrences",
        text.len(),
        occurrences.len()
    );
    Ok(occurrences)
}

/// 番兵を使わずに`text`中の`pattern`の出現位置を昇順に返す
///
/// `pattern`と`text`をそのまま連結し, Z値を`pattern.len()`で頭打ちにしながら計算する.
/// `pattern`が空なら`0..=text.len()`の全ての位置を返す.
///
/// # Time complexity
///
/// - *O*(*M* + *N*)
#[must_use]
pub fn search_without_sentinel<T: Eq>(pattern: &[T], text: &[T]) -> Vec<usize> {
    let m = pattern.len();
    if m == 0 {
        return (0..=text.len()).collect();
    }

    let joined: Vec<&T> = pattern.iter().chain(text).collect();
    let z = z_capped(&joined, m);
    // k < m はpattern内から始まる一致なので出現ではない
    let occurrences: Vec<usize> = (m..joined.len())
        .filter(|&k| z[k] == m)
        .map(|k| k - m)
        .collect();
    trace!(
        "sentinel-free search: pattern {m}, text {}, {} occurrences",
        text.len(),
        occurrences.len()
    );
    occurrences
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn naive_search(pattern: &[u8], text: &[u8]) -> Vec<usize> {
        if pattern.len() > text.len() {
            return vec![];
        }
        (0..=text.len() - pattern.len())
            .filter(|&i| &text[i..i + pattern.len()] == pattern)
            .collect()
    }

    #[test]
    fn without_sentinel() {
        assert_eq!(search_without_sentinel(b"ab", b"ababab"), [0, 2, 4]);
        assert_eq!(
            search_without_sentinel(b"xyz", b"ababab"),
            Vec::<usize>::new()
        );
        assert_eq!(search_without_sentinel(b"aa", b"aaaa"), [0, 1, 2]);
        assert_eq!(search_without_sentinel(b"abc", b"abc"), [0]);
        assert_eq!(search_without_sentinel(b"abcd", b"abc"), Vec::<usize>::new());
    }

    #[test]
    fn with_sentinel() {
        assert_eq!(
            search_with_sentinel(b"ab", b"ababab", &DEFAULT_SENTINEL),
            Ok(vec![0, 2, 4])
        );
        assert_eq!(
            search_with_sentinel(b"xyz", b"ababab", &DEFAULT_SENTINEL),
            Ok(vec![])
        );
        assert_eq!(
            search_with_sentinel(b"aba", b"abababa", &DEFAULT_SENTINEL),
            Ok(vec![0, 2, 4])
        );
        assert_eq!(
            search_with_sentinel(b"ab", b"", &DEFAULT_SENTINEL),
            Ok(vec![])
        );
    }

    #[test]
    fn empty_pattern() {
        assert_eq!(search_without_sentinel(b"", b"abc"), [0, 1, 2, 3]);
        assert_eq!(
            search_with_sentinel(b"", b"abc", &DEFAULT_SENTINEL),
            Ok(vec![0, 1, 2, 3])
        );
        assert_eq!(search_without_sentinel(b"", b""), [0]);
        assert_eq!(
            search_with_sentinel(b"", b"a$", &DEFAULT_SENTINEL),
            Err(SentinelError::InText { position: 1 })
        );
    }

    #[test]
    fn sentinel_collision() {
        assert_eq!(
            search_with_sentinel(b"a$b", b"a$b", &DEFAULT_SENTINEL),
            Err(SentinelError::InPattern { position: 1 })
        );
        assert_eq!(
            search_with_sentinel(b"ab", b"xx$ab", &DEFAULT_SENTINEL),
            Err(SentinelError::InText { position: 2 })
        );
        assert_eq!(
            search_with_sentinel(b"a$b", b"a$b", &b'#'),
            Ok(vec![0])
        );
    }

    #[test]
    fn pattern_overlapping_itself() {
        // pattern内から始まる一致を出現として数えない
        assert_eq!(search_without_sentinel(b"aa", b"aaa"), [0, 1]);
        assert_eq!(search_without_sentinel(b"aa", b"a"), Vec::<usize>::new());
        assert_eq!(search_without_sentinel(b"abab", b"ab"), Vec::<usize>::new());
    }

    #[test]
    fn chars() {
        let pattern: Vec<char> = "ぴよ".chars().collect();
        let text: Vec<char> = "ぴよぴよぴぴよ".chars().collect();
        assert_eq!(search_without_sentinel(&pattern, &text), [0, 2, 5]);
        assert_eq!(
            search_with_sentinel(&pattern, &text, &'\0'),
            Ok(vec![0, 2, 5])
        );
    }

    #[test]
    fn exhaustive() {
        fn strings(max_len: usize) -> Vec<Vec<u8>> {
            let mut all = vec![vec![]];
            let mut last = vec![vec![]];
            for _ in 0..max_len {
                last = last
                    .iter()
                    .flat_map(|s: &Vec<u8>| {
                        [b'a', b'b'].map(|c| {
                            let mut s = s.clone();
                            s.push(c);
                            s
                        })
                    })
                    .collect();
                all.extend(last.iter().cloned());
            }
            all
        }

        let patterns = strings(4);
        let texts = strings(8);
        for pattern in &patterns {
            for text in &texts {
                let expected = if pattern.is_empty() {
                    (0..=text.len()).collect()
                } else {
                    naive_search(pattern, text)
                };
                assert_eq!(
                    search_without_sentinel(pattern, text),
                    expected,
                    "{pattern:?} {text:?}"
                );
                assert_eq!(
                    search_with_sentinel(pattern, text, &DEFAULT_SENTINEL),
                    Ok(expected),
                    "{pattern:?} {text:?}"
                );
            }
        }
    }

    #[test]
    fn random() {
        let mut rng = StdRng::seed_from_u64(0x2e4);
        for _ in 0..1000 {
            let sigma = rng.gen_range(1..=3u8);
            let m = rng.gen_range(1..=6);
            let len = rng.gen_range(0..=200);
            let pattern: Vec<u8> = (0..m).map(|_| b'0' + rng.gen_range(0..sigma)).collect();
            let text: Vec<u8> = (0..len).map(|_| b'0' + rng.gen_range(0..sigma)).collect();
            let found = search_without_sentinel(&pattern, &text);
            assert_eq!(found, naive_search(&pattern, &text));
            assert_eq!(
                search_with_sentinel(&pattern, &text, &DEFAULT_SENTINEL),
                Ok(found)
            );
        }
    }
}
