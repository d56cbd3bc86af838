use super::Error;

pub trait OkOrMissing<T> {
	fn ok_or_missing<S: ToString>(self, key: S) -> Result<T, Error>;
}

impl<T> OkOrMissing<T> for Option<T> {
	fn ok_or_missing<S: ToString>(self, key: S) -> Result<T, Error> {
		self.ok_or_else(|| Error::MissingKey(key.to_string()))
	}
}
