//! RESP arrays: fixed tuples, runtime text lists and the null array.

use std::io::Write;

use crate::encode::RespEncoder;
use crate::encode::put;
use crate::error::EncodeError;
use crate::types::Null;
use crate::types::SimpleString;
use crate::utils::ARRAY;
use crate::utils::write_header;

mod private {
	pub trait Sealed {}
}

/// Element sets a fixed [`Array`] can hold.
///
/// Implemented for tuples of up to twelve [`RespEncoder`] values, for
/// homogeneous slices and arrays, for `()` (the empty array) and for
/// [`Null`] (the null array). The trait is sealed: the header count and the
/// elements written must always agree.
///
/// ```compile_fail
/// use std::io::Write;
///
/// use respwire::ArrayItems;
/// use respwire::EncodeError;
///
/// struct Short;
///
/// impl ArrayItems for Short {
///     fn count(&self) -> Option<usize> {
///         Some(2)
///     }
///
///     fn encode_items<W: Write + ?Sized>(&self, _sink: &mut W) -> Result<(), EncodeError> {
///         Ok(())
///     }
/// }
/// ```
pub trait ArrayItems: private::Sealed {
	/// Count written in the header, `None` for the null array.
	fn count(&self) -> Option<usize>;

	/// Encode every element in declaration order.
	fn encode_items<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), EncodeError>;
}

impl private::Sealed for () {}

impl ArrayItems for () {
	fn count(&self) -> Option<usize> {
		Some(0)
	}

	fn encode_items<W: Write + ?Sized>(&self, _sink: &mut W) -> Result<(), EncodeError> {
		Ok(())
	}
}

impl private::Sealed for Null {}

impl ArrayItems for Null {
	fn count(&self) -> Option<usize> {
		None
	}

	fn encode_items<W: Write + ?Sized>(&self, _sink: &mut W) -> Result<(), EncodeError> {
		Ok(())
	}
}

impl<T: RespEncoder> private::Sealed for &[T] {}

impl<T: RespEncoder> ArrayItems for &[T] {
	fn count(&self) -> Option<usize> {
		Some(self.len())
	}

	fn encode_items<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), EncodeError> {
		for item in self.iter() {
			put(sink, item)?;
		}
		Ok(())
	}
}

impl<T: RespEncoder, const N: usize> private::Sealed for [T; N] {}

impl<T: RespEncoder, const N: usize> ArrayItems for [T; N] {
	fn count(&self) -> Option<usize> {
		Some(N)
	}

	fn encode_items<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), EncodeError> {
		self.as_slice().encode_items(sink)
	}
}

macro_rules! impl_array_items {
	($len:expr => $($name:ident . $idx:tt),+) => {
		impl<$($name: RespEncoder),+> private::Sealed for ($($name,)+) {}

		impl<$($name: RespEncoder),+> ArrayItems for ($($name,)+) {
			#[inline]
			fn count(&self) -> Option<usize> {
				Some($len)
			}

			fn encode_items<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), EncodeError> {
				$(put(sink, &self.$idx)?;)+
				Ok(())
			}
		}
	};
}

impl_array_items!(1 => A.0);
impl_array_items!(2 => A.0, B.1);
impl_array_items!(3 => A.0, B.1, C.2);
impl_array_items!(4 => A.0, B.1, C.2, D.3);
impl_array_items!(5 => A.0, B.1, C.2, D.3, E.4);
impl_array_items!(6 => A.0, B.1, C.2, D.3, E.4, F.5);
impl_array_items!(7 => A.0, B.1, C.2, D.3, E.4, F.5, G.6);
impl_array_items!(8 => A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);
impl_array_items!(9 => A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8);
impl_array_items!(10 => A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9);
impl_array_items!(11 => A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10);
impl_array_items!(12 => A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10, L.11);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Items<'a, T> {
	Fixed(T),
	List(&'a [&'a str]),
}

/// Array: `*2\r\n$3\r\nfoo\r\n$3\r\nbar\r\n`
///
/// Either a fixed tuple of heterogeneous values, built with [`Array::new`],
/// or a runtime-sized list of text, built with [`Array::from_list`]. List
/// elements are always framed as simple strings.
///
/// `Array<Null>` is the null array `*-1\r\n`, which is not the same thing as
/// the empty array `*0\r\n`.
///
/// ```rust
/// use respwire::Array;
/// use respwire::BulkString;
/// use respwire::Integer;
/// use respwire::RespEncoder;
///
/// let cmd = Array::new((BulkString::new("EXPIRE"), BulkString::new("key"), Integer::new(60)));
/// assert_eq!(&cmd.encode().unwrap()[..], b"*3\r\n$6\r\nEXPIRE\r\n$3\r\nkey\r\n:60\r\n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Array<'a, T = ()> {
	items: Items<'a, T>,
}

impl<T: ArrayItems> Array<'_, T> {
	pub fn new(items: T) -> Self {
		Self {
			items: Items::Fixed(items),
		}
	}

	/// Count written in the header, `None` for the null array.
	pub fn len(&self) -> Option<usize> {
		match &self.items {
			Items::Fixed(items) => items.count(),
			Items::List(list) => Some(list.len()),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == Some(0)
	}

	pub fn is_null(&self) -> bool {
		self.len().is_none()
	}
}

impl<'a> Array<'a> {
	/// An array whose size is only known at runtime, e.g. a variable number
	/// of keys. The list stays borrowed until the encode is done, so the
	/// header count always matches the elements written.
	pub fn from_list(list: &'a [&'a str]) -> Self {
		Self {
			items: Items::List(list),
		}
	}
}

impl Array<'_, Null> {
	/// The null array.
	pub fn null() -> Self {
		Self::new(Null)
	}
}

impl From<Null> for Array<'_, Null> {
	fn from(null: Null) -> Self {
		Self::new(null)
	}
}

impl<'a> From<&'a [&'a str]> for Array<'a> {
	fn from(list: &'a [&'a str]) -> Self {
		Self::from_list(list)
	}
}

impl<T: ArrayItems> RespEncoder for Array<'_, T> {
	fn encode_to<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), EncodeError> {
		match &self.items {
			Items::Fixed(items) => {
				write_header(sink, ARRAY, items.count())?;
				items.encode_items(sink)
			}
			Items::List(list) => {
				write_header(sink, ARRAY, Some(list.len()))?;
				for item in list.iter() {
					put(sink, &SimpleString::new(*item))?;
				}
				Ok(())
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;
	use crate::BinaryData;
	use crate::BulkString;
	use crate::ErrorMessage;
	use crate::Integer;

	#[test]
	fn test_encode_array() {
		let val = Array::new((SimpleString::new("hello"), Integer::new(42)));
		assert!(!val.is_null());
		let encoded = val.encode().unwrap();
		assert_eq!(encoded, b"*2\r\n+hello\r\n:42\r\n".as_slice());
	}

	#[test]
	fn test_encode_array_empty() {
		let val = Array::new(());
		assert!(val.is_empty());
		assert_eq!(val.encode().unwrap(), b"*0\r\n".as_slice());
	}

	#[test]
	fn test_encode_null_array() {
		let val = Array::null();
		assert!(val.is_null());
		assert_eq!(val.len(), None);
		assert_eq!(val.encode().unwrap(), b"*-1\r\n".as_slice());
		assert_eq!(Array::<Null>::from(Null).encode().unwrap(), b"*-1\r\n".as_slice());
	}

	#[test]
	fn test_null_array_differs_from_empty() {
		assert_ne!(
			Array::null().encode().unwrap(),
			Array::new(()).encode().unwrap()
		);
	}

	#[test]
	fn test_null_inside_array_is_an_element() {
		let val = Array::new((Null,));
		assert_eq!(val.encode().unwrap(), b"*1\r\n$-1\r\n".as_slice());
	}

	#[rstest]
	#[case(&[], b"*0\r\n")]
	#[case(&["a"], b"*1\r\n+a\r\n")]
	#[case(&["a", "b", "c"], b"*3\r\n+a\r\n+b\r\n+c\r\n")]
	fn test_encode_list(#[case] list: &[&str], #[case] expected: &[u8]) {
		let val = Array::from_list(list);
		assert_eq!(val.len(), Some(list.len()));
		assert_eq!(val.encode().unwrap(), expected);
	}

	#[test]
	fn test_encode_list_from_owned_strings() {
		let keys: Vec<String> = (1..=3).map(|i| format!("key:{i}")).collect();
		let refs: Vec<&str> = keys.iter().map(String::as_str).collect();
		let array: Array<'_> = refs.as_slice().into();
		let encoded = array.encode().unwrap();
		assert_eq!(
			encoded,
			b"*3\r\n+key:1\r\n+key:2\r\n+key:3\r\n".as_slice()
		);
	}

	#[test]
	fn test_encode_mixed_kinds() {
		let payload = [1u8, 0, 2];
		let val = Array::new((
			BulkString::new("SET"),
			BinaryData::new(&payload),
			ErrorMessage::new("ERR"),
			BulkString::null(),
			Integer::new(-1i32),
		));
		assert_eq!(val.len(), Some(5));
		assert_eq!(
			val.encode().unwrap(),
			b"*5\r\n$3\r\nSET\r\n$3\r\n\x01\x00\x02\r\n-ERR\r\n$-1\r\n:-1\r\n".as_slice()
		);
	}

	#[test]
	fn test_encode_nested_arrays() {
		let list = ["x", "y"];
		let val = Array::new((
			Array::new((Integer::new(1), Integer::new(2))),
			Array::from_list(&list),
			Array::null(),
			Array::new(()),
		));
		assert_eq!(
			val.encode().unwrap(),
			b"*4\r\n*2\r\n:1\r\n:2\r\n*2\r\n+x\r\n+y\r\n*-1\r\n*0\r\n".as_slice()
		);
	}

	#[test]
	fn test_encode_slice_of_bulk_strings() {
		let args = ["DEL", "k1", "k2"].map(BulkString::new);
		assert_eq!(Array::new(args).len(), Some(3));

		let args: Vec<BulkString> = args.to_vec();
		let encoded = Array::new(args.as_slice()).encode().unwrap();
		assert_eq!(
			encoded,
			b"*3\r\n$3\r\nDEL\r\n$2\r\nk1\r\n$2\r\nk2\r\n".as_slice()
		);
	}

	#[test]
	fn test_encode_empty_slice() {
		let args: &[Integer<i64>] = &[];
		assert_eq!(Array::new(args).encode().unwrap(), b"*0\r\n".as_slice());
	}

	#[test]
	fn test_array_of_references() {
		let key = BulkString::new("key");
		let val = Array::new((&key, &key));
		assert_eq!(
			val.encode().unwrap(),
			b"*2\r\n$3\r\nkey\r\n$3\r\nkey\r\n".as_slice()
		);
	}

	#[test]
	fn test_twelve_elements() {
		let one = Integer::new(1u8);
		let val = Array::new((
			one, one, one, one, one, one, one, one, one, one, one, one,
		));
		let encoded = val.encode().unwrap();
		assert!(encoded.starts_with(b"*12\r\n"));
		assert_eq!(encoded.len(), 5 + 12 * 4);
	}
}
