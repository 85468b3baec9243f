//! Linear-space global alignment (Hirschberg's divide and conquer).
//!
//! The gap cost of a symbol `c` is whatever the matrix stores for
//! `('-', c)`, charged per symbol, so a gap run costs linearly in its
//! length by construction. Each recursion level splits the first sequence
//! at its midpoint and finds the matching split of the second from one
//! forward and one backward score-only pass, keeping working space at
//! O(n) per pass while the assembled output is O(m+n).

use crate::alphabet::GAP;
use crate::error::AlignResult;
use crate::matrix::SimilarityMatrix;

use super::types::Alignment;

pub fn align_linear(x: &[u8], y: &[u8], matrix: &SimilarityMatrix) -> AlignResult<Alignment> {
    let mut row_x = String::with_capacity(x.len() + y.len());
    let mut row_y = String::with_capacity(x.len() + y.len());
    solve(x, y, matrix, &mut row_x, &mut row_y)?;
    let score = matrix.evaluate(row_x.as_bytes(), row_y.as_bytes())?;
    Ok(Alignment {
        score,
        x: row_x,
        y: row_y,
    })
}

/// Recursion over subslices of the fixed inputs; aligned segments are
/// appended to the two output buffers as each call returns, left to right.
fn solve(
    x: &[u8],
    y: &[u8],
    matrix: &SimilarityMatrix,
    out_x: &mut String,
    out_y: &mut String,
) -> AlignResult<()> {
    if x.is_empty() {
        for &c in y {
            out_x.push(GAP as char);
            out_y.push(c as char);
        }
        Ok(())
    } else if y.is_empty() {
        for &c in x {
            out_x.push(c as char);
            out_y.push(GAP as char);
        }
        Ok(())
    } else if x.len() == 1 {
        let (row_long, row_letter) = solve_len1(y, x[0], matrix)?;
        out_x.push_str(&row_letter);
        out_y.push_str(&row_long);
        Ok(())
    } else if y.len() == 1 {
        let (row_long, row_letter) = solve_len1(x, y[0], matrix)?;
        out_x.push_str(&row_long);
        out_y.push_str(&row_letter);
        Ok(())
    } else {
        let (xl, xr) = x.split_at(x.len() / 2);
        // The two score passes are independent of each other.
        let (forward, backward) = par_join!(
            || last_row(xl, y, matrix, false),
            || last_row(xr, y, matrix, true)
        );
        let forward = forward?;
        let mut backward = backward?;
        backward.reverse();
        let split = best_split(&forward, &backward);
        solve(xl, &y[..split], matrix, out_x, out_y)?;
        solve(xr, &y[split..], matrix, out_x, out_y)
    }
}

/// Final row of the score-only DP of `x` against every prefix of `y`;
/// with `reversed` set, both sequences are scanned back to front, which
/// yields the suffix scores without copying either input.
fn last_row(
    x: &[u8],
    y: &[u8],
    matrix: &SimilarityMatrix,
    reversed: bool,
) -> AlignResult<Vec<f64>> {
    let at = |s: &[u8], i: usize| -> u8 {
        if reversed {
            s[s.len() - 1 - i]
        } else {
            s[i]
        }
    };

    let mut prev = vec![0.0; y.len() + 1];
    for j in 1..=y.len() {
        prev[j] = prev[j - 1] + matrix.similarity(GAP, at(y, j - 1))?;
    }
    let mut cur = vec![0.0; y.len() + 1];
    for i in 1..=x.len() {
        let xc = at(x, i - 1);
        let gap_x = matrix.similarity(GAP, xc)?;
        cur[0] = prev[0] + gap_x;
        for j in 1..=y.len() {
            let yc = at(y, j - 1);
            let down = prev[j] + gap_x;
            let right = cur[j - 1] + matrix.similarity(GAP, yc)?;
            let diag = prev[j - 1] + matrix.similarity(xc, yc)?;
            cur[j] = diag.max(right).max(down);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    Ok(prev)
}

/// Split column maximizing forward + backward score; ties keep the
/// leftmost column.
fn best_split(forward: &[f64], backward: &[f64]) -> usize {
    let mut best = 0;
    let mut best_score = f64::NEG_INFINITY;
    for (k, (f, b)) in forward.iter().zip(backward.iter()).enumerate() {
        let total = f + b;
        if total > best_score {
            best = k;
            best_score = total;
        }
    }
    best
}

/// Direct solution when one side is a single letter: one forward pass over
/// `longer` tracking, per prefix, the best score with the letter unconsumed
/// and consumed, plus the single transition that consumed it; then the two
/// rows are rebuilt around that pivot column.
fn solve_len1(
    longer: &[u8],
    letter: u8,
    matrix: &SimilarityMatrix,
) -> AlignResult<(String, String)> {
    let gap_letter = matrix.similarity(GAP, letter)?;
    let mut upper_left = 0.0;
    let mut upper_right = gap_letter;
    let mut pivot = 0usize;
    let mut via_gap = true;
    for i in 1..=longer.len() {
        let lc = longer[i - 1];
        let gap_lc = matrix.similarity(GAP, lc)?;
        let bottom_left = upper_left + gap_lc;
        let down = upper_right + gap_lc;
        let right = bottom_left + gap_letter;
        let diag = upper_left + matrix.similarity(lc, letter)?;
        let bottom_right;
        // Prefer the diagonal pairing, then the gap column, then carrying
        // the consumed state down.
        if diag >= down && diag >= right {
            pivot = i;
            via_gap = false;
            bottom_right = diag;
        } else if right >= diag && right >= down {
            pivot = i;
            via_gap = true;
            bottom_right = right;
        } else {
            bottom_right = down;
        }
        upper_left = bottom_left;
        upper_right = bottom_right;
    }

    let mut row_long = String::with_capacity(longer.len() + 1);
    let mut row_letter = String::with_capacity(longer.len() + 1);
    if via_gap {
        // The letter sits in its own gap column after `pivot` symbols.
        push_gapped(&mut row_long, &mut row_letter, &longer[..pivot]);
        row_long.push(GAP as char);
        row_letter.push(letter as char);
        push_gapped(&mut row_long, &mut row_letter, &longer[pivot..]);
    } else {
        // The letter pairs diagonally with longer[pivot - 1].
        push_gapped(&mut row_long, &mut row_letter, &longer[..pivot - 1]);
        row_long.push(longer[pivot - 1] as char);
        row_letter.push(letter as char);
        push_gapped(&mut row_long, &mut row_letter, &longer[pivot..]);
    }
    Ok((row_long, row_letter))
}

fn push_gapped(row_long: &mut String, row_letter: &mut String, symbols: &[u8]) {
    for &c in symbols {
        row_long.push(c as char);
        row_letter.push(GAP as char);
    }
}
