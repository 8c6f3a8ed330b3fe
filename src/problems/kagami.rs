//! Kagami mochi pair counting.
//!
//! A mochi may sit on another iff its size is at most half of the lower one's.
//! Given N sizes, count the ordered (top, bottom) pairs that can be stacked.
//!
//! After sorting, the smallest valid bottom for a top only moves right as the
//! top grows, so one pointer sweep counts every pair in O(N) after the sort.

use std::io::Read;

use crate::error::PuzzleError;

/// A rice cake of positive size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mochi {
    pub size: u64,
}

impl Mochi {
    pub fn new(size: u64) -> Self {
        Self { size }
    }
}

/// A validated two-tier stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KagamiMochi {
    top: Mochi,
    bottom: Mochi,
}

impl KagamiMochi {
    /// Whether `top` may be placed on `bottom`.
    #[inline]
    pub fn can_stack(top: Mochi, bottom: Mochi) -> bool {
        top.size <= bottom.size >> 1
    }

    pub fn stack(top: Mochi, bottom: Mochi) -> Result<Self, PuzzleError> {
        if !Self::can_stack(top, bottom) {
            return Err(PuzzleError::InvalidStack {
                top: top.size,
                bottom: bottom.size,
            });
        }
        Ok(Self { top, bottom })
    }

    pub fn top(&self) -> Mochi {
        self.top
    }

    pub fn bottom(&self) -> Mochi {
        self.bottom
    }
}

/// Counting input as read: the declared count and the sizes that followed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawInput {
    pub count: usize,
    pub sizes: Vec<u64>,
}

impl RawInput {
    /// Parse `N` followed by `N` whitespace-separated positive sizes.
    pub fn parse(input: &str) -> Result<Self, PuzzleError> {
        let mut tokens = input.split_whitespace();
        let first = tokens.next().ok_or(PuzzleError::MissingInput("mochi count"))?;
        let count = first
            .parse::<usize>()
            .map_err(|e| PuzzleError::parse_int(first, e))?;

        let mut sizes = Vec::with_capacity(count);
        for (index, token) in tokens.enumerate() {
            let size = token
                .parse::<u64>()
                .map_err(|e| PuzzleError::parse_int(token, e))?;
            if size == 0 {
                return Err(PuzzleError::ZeroSize { index });
            }
            sizes.push(size);
        }
        if sizes.len() != count {
            return Err(PuzzleError::CountMismatch {
                expected: count,
                found: sizes.len(),
            });
        }
        Ok(Self { count, sizes })
    }

    pub fn read_from<R: Read>(mut reader: R) -> Result<Self, PuzzleError> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Self::parse(&input)
    }
}

/// Mochis sorted by ascending size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortedMochis {
    mochis: Vec<Mochi>,
}

impl SortedMochis {
    pub fn from_raw(raw: RawInput) -> Self {
        Self::from_sizes(raw.sizes)
    }

    pub fn from_sizes(sizes: Vec<u64>) -> Self {
        let mut mochis: Vec<Mochi> = sizes.into_iter().map(Mochi::new).collect();
        mochis.sort_unstable();
        debug_assert!(mochis.windows(2).all(|w| w[0] <= w[1]));
        Self { mochis }
    }

    pub fn len(&self) -> usize {
        self.mochis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mochis.is_empty()
    }

    pub fn as_slice(&self) -> &[Mochi] {
        &self.mochis
    }
}

/// Count (top, bottom) pairs that form a valid kagami mochi.
pub fn count_stackable_pairs(sorted: &SortedMochis) -> u64 {
    let mochis = sorted.as_slice();
    let n = mochis.len();
    let mut bottom = 0usize;
    let mut total = 0u64;
    for &top in mochis {
        while bottom < n && !KagamiMochi::can_stack(top, mochis[bottom]) {
            bottom += 1;
        }
        total += (n - bottom) as u64;
    }
    total
}

/// Parse `input` and count stackable pairs.
pub fn solve(input: &str) -> Result<u64, PuzzleError> {
    let raw = RawInput::parse(input)?;
    let sorted = SortedMochis::from_raw(raw);
    let pairs = count_stackable_pairs(&sorted);
    tracing::debug!(mochis = sorted.len(), pairs, "counted kagami mochi");
    Ok(pairs)
}
