//! 乱択による検算
//!
//! ランダムな列を作り, [`z_naive`]と[`z_linear`]の結果, および2種類の検索の結果を突き合わせる.

use log::{debug, info};
use rand::Rng;
use thiserror::Error;

use super::z::{z_linear, z_naive};
use super::zsearch::{search_with_sentinel, search_without_sentinel};

/// 検算の失敗
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("alphabet is empty")]
    EmptyAlphabet,
    #[error("sentinel {sentinel:?} is part of the alphabet")]
    SentinelInAlphabet { sentinel: char },
    #[error("z arrays differ for {input:?}: naive {naive:?}, linear {linear:?}")]
    ZMismatch {
        input: String,
        naive: Vec<usize>,
        linear: Vec<usize>,
    },
    #[error(
        "searches differ for pattern {pattern:?} in {text:?}: \
         with sentinel {with_sentinel:?}, without sentinel {without_sentinel:?}"
    )]
    SearchMismatch {
        pattern: String,
        text: String,
        with_sentinel: Vec<usize>,
        without_sentinel: Vec<usize>,
    },
}

/// 乱択検算の設定
#[derive(Debug, Clone)]
pub struct RandomCheck {
    /// 試行回数
    pub cases: usize,
    /// 生成する列の最大長
    pub max_len: usize,
    /// 列に使う文字
    pub alphabet: Vec<u8>,
    /// 番兵付き検索で使う文字. `alphabet`に含まれていてはいけない
    pub sentinel: u8,
}

impl Default for RandomCheck {
    fn default() -> Self {
        Self {
            cases: 40000,
            max_len: 400,
            alphabet: b"0123456789".to_vec(),
            sentinel: b'$',
        }
    }
}

impl RandomCheck {
    /// 検算を`self.cases`回行い, 成功した回数を返す
    ///
    /// 最初に見つかった食い違いを[`CheckError`]として返す.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize, CheckError> {
        if self.alphabet.is_empty() {
            return Err(CheckError::EmptyAlphabet);
        }
        if self.alphabet.contains(&self.sentinel) {
            return Err(CheckError::SentinelInAlphabet {
                sentinel: char::from(self.sentinel),
            });
        }
        info!(
            "checking {} cases, max length {}, alphabet {:?}",
            self.cases,
            self.max_len,
            String::from_utf8_lossy(&self.alphabet)
        );
        for case in 0..self.cases {
            let s = self.generate(rng, self.max_len);
            check_z(&s)?;

            let m = rng.gen_range(1..=self.max_len.clamp(1, 8));
            let pattern = self.generate(rng, m);
            self.check_search(&pattern, &s)?;

            if case % 10000 == 9999 {
                debug!("{} cases passed", case + 1);
            }
        }
        Ok(self.cases)
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R, max_len: usize) -> Vec<u8> {
        let len = rng.gen_range(0..=max_len);
        (0..len)
            .map(|_| self.alphabet[rng.gen_range(0..self.alphabet.len())])
            .collect()
    }

    fn check_search(&self, pattern: &[u8], text: &[u8]) -> Result<(), CheckError> {
        let without_sentinel = search_without_sentinel(pattern, text);
        let with_sentinel = search_with_sentinel(pattern, text, &self.sentinel).map_err(|_| {
            CheckError::SentinelInAlphabet {
                sentinel: char::from(self.sentinel),
            }
        })?;
        if with_sentinel != without_sentinel {
            return Err(CheckError::SearchMismatch {
                pattern: render(pattern),
                text: render(text),
                with_sentinel,
                without_sentinel,
            });
        }
        Ok(())
    }
}

fn check_z(s: &[u8]) -> Result<(), CheckError> {
    let naive = z_naive(s);
    let linear = z_linear(s);
    if naive != linear {
        return Err(CheckError::ZMismatch {
            input: render(s),
            naive,
            linear,
        });
    }
    Ok(())
}

fn render(s: &[u8]) -> String {
    String::from_utf8_lossy(s).into_owned()
}
