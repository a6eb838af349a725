//! Serialized as a tuple of `R` rows, each a tuple of `C` entries. serde only implements
//! its array support up to 32 elements and not over const generics, so this is by hand.

use std::{fmt, marker::PhantomData};

use num_traits::Zero;
use serde::{
  de::{self, SeqAccess, Visitor},
  ser::SerializeTuple,
  Deserialize, Deserializer, Serialize, Serializer,
};

use crate::*;

struct RowRef<'a, const C: usize, T>(&'a [T; C]);

impl<const C: usize, T: Serialize> Serialize for RowRef<'_, C, T> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut row = serializer.serialize_tuple(C)?;
    for v in self.0 {
      row.serialize_element(v)?;
    }
    row.end()
  }
}

impl<const R: usize, const C: usize, T: Serialize> Serialize for Matrix<R, C, T> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut rows = serializer.serialize_tuple(R)?;
    for row in &self.data {
      rows.serialize_element(&RowRef(row))?;
    }
    rows.end()
  }
}

struct Row<const C: usize, T>([T; C]);

struct RowVisitor<const C: usize, T>(PhantomData<T>);

impl<'de, const C: usize, T: Deserialize<'de> + Zero + Copy> Visitor<'de> for RowVisitor<C, T> {
  type Value = Row<C, T>;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "a row of {} entries", C)
  }

  fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
    let mut row = [T::zero(); C];
    for (i, slot) in row.iter_mut().enumerate() {
      *slot = seq
        .next_element()?
        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
    }
    if seq.next_element::<de::IgnoredAny>()?.is_some() {
      return Err(de::Error::invalid_length(C + 1, &self));
    }
    Ok(Row(row))
  }
}

impl<'de, const C: usize, T: Deserialize<'de> + Zero + Copy> Deserialize<'de> for Row<C, T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_tuple(C, RowVisitor(PhantomData))
  }
}

struct MatrixVisitor<const R: usize, const C: usize, T>(PhantomData<T>);

impl<'de, const R: usize, const C: usize, T: Deserialize<'de> + Zero + Copy> Visitor<'de>
  for MatrixVisitor<R, C, T>
{
  type Value = Matrix<R, C, T>;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{} rows of {} entries", R, C)
  }

  fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
    let mut result = Matrix::<R, C, T>::zero();
    for (i, slot) in result.data.iter_mut().enumerate() {
      let Row(row) = seq
        .next_element::<Row<C, T>>()?
        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
      *slot = row;
    }
    if seq.next_element::<de::IgnoredAny>()?.is_some() {
      return Err(de::Error::invalid_length(R + 1, &self));
    }
    Ok(result)
  }
}

impl<'de, const R: usize, const C: usize, T: Deserialize<'de> + Zero + Copy> Deserialize<'de>
  for Matrix<R, C, T>
{
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_tuple(R, MatrixVisitor(PhantomData))
  }
}

#[cfg(test)]
mod test {
  use crate::*;

  #[test]
  fn json_shape() {
    let m = Matrix::<2, 3, i32>::new([[1, 2, 3], [4, 5, 6]]);
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, "[[1,2,3],[4,5,6]]");

    let back: Matrix<2, 3, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
  }

  #[test]
  fn rejects_wrong_shape() {
    assert!(serde_json::from_str::<Mat2<f64>>("[[1,2],[3]]").is_err());
    assert!(serde_json::from_str::<Mat2<f64>>("[[1,2],[3,4],[5,6]]").is_err());
    assert!(serde_json::from_str::<Mat2<f64>>("[[1,2,9],[3,4]]").is_err());
  }

  #[test]
  fn larger_than_serde_arrays() {
    let m = Matrix::<2, 40, u8>::from_fn(|row, col| (row * 40 + col) as u8);
    let back: Matrix<2, 40, u8> = serde_json::from_str(&serde_json::to_string(&m).unwrap()).unwrap();
    assert_eq!(back, m);
  }
}
