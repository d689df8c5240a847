/// 既に分かっている, 先頭と一致する区間
///
/// `slice[left..right] == slice[..right - left]` を満たす. `right == 0` なら区間は無い.
#[derive(Clone, Copy, Default)]
struct ZBox {
    left: usize,
    right: usize,
}

/// Z配列を素朴に作成する
///
/// [`z_linear`]の検算用. 空列に対しては空の配列を返す.
///
/// # Time complexity
///
/// - *O*(*N*²)
#[must_use]
pub fn z_naive(slice: &[impl Eq]) -> Vec<usize> {
    let n = slice.len();
    let mut z = Vec::with_capacity(n);
    if n == 0 {
        return z;
    }
    z.push(n);
    for k in 1..n {
        let mut len = 0;
        while k + len < n && slice[len] == slice[k + len] {
            len += 1;
        }
        z.push(len);
    }
    z
}

/// Z配列を作成する
///
/// `z[k]`は`slice`と`slice[k..]`の最長共通接頭辞の長さ. `z[0]`は`slice.len()`.
/// 結果は[`z_naive`]と常に一致する.
///
/// # Time complexity
///
/// - *O*(*N*)
#[must_use]
pub fn z_linear(slice: &[impl Eq]) -> Vec<usize> {
    z_capped(slice, slice.len())
}

/// `k >= 1`の値を`cap`で頭打ちにしたZ配列を作成する
///
/// 頭打ちは伸長の途中で行うので, Zボックスが`cap`を超えた値から作られることは無い.
///
/// # Time complexity
///
/// - *O*(*N*)
#[must_use]
pub(crate) fn z_capped<T: Eq>(slice: &[T], cap: usize) -> Vec<usize> {
    let n = slice.len();
    let mut z = vec![0; n];
    if n == 0 {
        return z;
    }
    z[0] = n;
    let mut zbox = ZBox::default();
    for k in 1..n {
        let start = if k < zbox.right {
            let mirrored = z[k - zbox.left];
            let remaining = zbox.right - k;
            if mirrored < remaining {
                z[k] = mirrored;
                continue;
            }
            remaining
        } else {
            0
        };
        let len = extend(slice, k, start, cap);
        debug_assert!(len <= n - k && len <= cap);
        z[k] = len;
        if len > 0 {
            debug_assert!(zbox.right <= k + len);
            zbox = ZBox {
                left: k,
                right: k + len,
            };
        }
    }
    z
}

/// `slice[..len] == slice[k..k + len]`が分かっている状態から一致を伸ばす
fn extend<T: Eq>(slice: &[T], k: usize, mut len: usize, cap: usize) -> usize {
    while len < cap && k + len < slice.len() && slice[len] == slice[k + len] {
        len += 1;
    }
    len
}
