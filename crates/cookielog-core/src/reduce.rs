//! Frequency reducer. Tallies cookies and picks the most active ones.

use std::collections::HashMap;

use crate::WinnerSet;

/// Occurrence count per cookie, iterated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Count every cookie in a single pass.
    pub fn from_cookies<I, S>(cookies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for cookie in cookies {
            table.record(cookie.as_ref());
        }
        table
    }

    fn record(&mut self, cookie: &str) {
        match self.index.get(cookie) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(cookie.to_string(), self.counts.len());
                self.counts.push((cookie.to_string(), 1));
            }
        }
    }

    pub fn get(&self, cookie: &str) -> Option<usize> {
        self.index.get(cookie).map(|&slot| self.counts[slot].1)
    }

    /// Number of distinct cookies.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of cookies tallied.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    /// Highest count, or `None` for an empty table.
    pub fn most(&self) -> Option<usize> {
        self.counts.iter().map(|&(_, n)| n).max()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(cookie, n)| (cookie.as_str(), *n))
    }

    /// Cookies whose count equals [`most`](Self::most). Empty for an empty table.
    pub fn winners(&self) -> WinnerSet {
        let Some(most) = self.most() else {
            return WinnerSet::default();
        };
        let cookies = self
            .iter()
            .filter(|&(_, n)| n == most)
            .map(|(cookie, _)| cookie.to_string())
            .collect();
        WinnerSet::new(cookies, most)
    }
}

/// Tally `cookies` and return every cookie tied for the highest count.
pub fn find_most_active<I, S>(cookies: I) -> WinnerSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let table = FrequencyTable::from_cookies(cookies);
    let winners = table.winners();
    tracing::debug!(
        distinct = table.len(),
        total = table.total(),
        most = winners.count(),
        winners = winners.len(),
        "reduced cookie frequencies"
    );
    winners
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
