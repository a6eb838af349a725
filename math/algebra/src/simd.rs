//! SSE kernels behind the `simd` feature.
//!
//! Whole chunks of four lanes go through the vector registers, the remainder is finished
//! by the scalar loop, so rows of any width are handled. The dot product sums lanes
//! pairwise at the end and may round differently from the left to right scalar fold.

use std::arch::x86_64::*;

pub(crate) fn dot_f32(lhs: &[f32], rhs: &[f32]) -> f32 {
  assert_eq!(lhs.len(), rhs.len());
  let chunked = lhs.len() / 4 * 4;

  let mut sum = 0.;
  if chunked > 0 {
    // SAFETY: sse is part of the x86_64 baseline, every load stays below `chunked`
    unsafe {
      let mut acc = _mm_setzero_ps();
      for i in (0..chunked).step_by(4) {
        let a = _mm_loadu_ps(lhs.as_ptr().add(i));
        let b = _mm_loadu_ps(rhs.as_ptr().add(i));
        acc = _mm_add_ps(acc, _mm_mul_ps(a, b));
      }
      let mut lanes = [0f32; 4];
      _mm_storeu_ps(lanes.as_mut_ptr(), acc);
      sum = (lanes[0] + lanes[1]) + (lanes[2] + lanes[3]);
    }
  }

  for i in chunked..lhs.len() {
    sum += lhs[i] * rhs[i];
  }
  sum
}

pub(crate) fn add_scaled_f32(dst: &mut [f32], multiplier: f32, src: &[f32]) {
  assert_eq!(dst.len(), src.len());
  let chunked = dst.len() / 4 * 4;

  // SAFETY: same as above, loads and stores stay below `chunked`
  unsafe {
    let m = _mm_set1_ps(multiplier);
    for i in (0..chunked).step_by(4) {
      let d = _mm_loadu_ps(dst.as_ptr().add(i));
      let s = _mm_loadu_ps(src.as_ptr().add(i));
      _mm_storeu_ps(dst.as_mut_ptr().add(i), _mm_add_ps(d, _mm_mul_ps(m, s)));
    }
  }

  for i in chunked..dst.len() {
    dst[i] += multiplier * src[i];
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn portable_dot(lhs: &[f32], rhs: &[f32]) -> f32 {
    lhs.iter().zip(rhs).fold(0., |acc, (a, b)| acc + a * b)
  }

  #[test]
  fn dot_matches_portable() {
    let a = [1.5, -2., 3.25, 4., 0.5, -7.];
    let b = [2., 0.25, -1., 8., 3., 1.];
    for len in 0..=a.len() {
      let fast = dot_f32(&a[..len], &b[..len]);
      let reference = portable_dot(&a[..len], &b[..len]);
      assert!((fast - reference).abs() < 1e-5, "len {len}: {fast} vs {reference}");
    }
  }

  #[test]
  fn add_scaled_handles_remainder() {
    // five wide row, the fifth lane goes through the scalar tail
    let mut dst = [1., 2., 3., 4., 5.];
    add_scaled_f32(&mut dst, 2., &[1., 1., 1., 1., 1.]);
    assert_eq!(dst, [3., 4., 5., 6., 7.]);

    let mut narrow = [1., 2., 3.];
    add_scaled_f32(&mut narrow, -1., &[1., 2., 3.]);
    assert_eq!(narrow, [0., 0., 0.]);
  }
}
