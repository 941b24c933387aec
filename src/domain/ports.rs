/// Anything that can contribute to a WCS key-value-pair query string.
///
/// Axis-level value objects render as `axis(value)` fragments; the
/// [`Scaling`](crate::core::scaling::Scaling) parameter renders as a complete
/// `KEY=fragment,...` entry.
pub trait KvpSerializable {
    fn to_kvp(&self) -> String;
}

impl<T: KvpSerializable + ?Sized> KvpSerializable for &T {
    fn to_kvp(&self) -> String {
        (**self).to_kvp()
    }
}
