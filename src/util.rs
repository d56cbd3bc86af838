use crate::error::{Error, Result};

pub fn extract_between<'a>(
	text: &'a str,
	start: &'static str,
	end: &'static str,
) -> Result<&'a str> {
	let from = text.find(start).ok_or(Error::MarkerNotFound(start))? + start.len();
	let to = text[from..]
		.find(end)
		.ok_or(Error::MarkerNotFound(end))?;
	Ok(&text[from..from + to])
}

/// Title-cases every alphabetic run: "hip-hop" becomes "Hip-Hop".
pub fn title_case(string: &str) -> String {
	let mut out = String::with_capacity(string.len());
	let mut in_word = false;
	for ch in string.chars() {
		if ch.is_alphabetic() {
			if in_word {
				out.extend(ch.to_lowercase());
			} else {
				out.extend(ch.to_uppercase());
			}
			in_word = true;
		} else {
			out.push(ch);
			in_word = false;
		}
	}
	out
}

pub fn humanize_slug(slug: &str) -> String {
	title_case(&slug.replace('-', " "))
}

/// The site serves protocol-relative image URLs.
pub fn with_scheme(url: &str) -> String {
	if url.starts_with("//") {
		format!("http:{}", url)
	} else {
		url.to_owned()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn extracts_between_markers() {
		let html = "<html><script>var x = {\"a\":1}</script><script>other</script>";
		assert_eq!(
			extract_between(html, "var x = ", "</script>").unwrap(),
			"{\"a\":1}"
		);
	}

	#[test]
	fn missing_start_marker_fails() {
		let err = extract_between("<html></html>", "var x = ", "</script>").unwrap_err();
		assert!(matches!(err, Error::MarkerNotFound("var x = ")));
	}

	#[test]
	fn missing_end_marker_fails() {
		let err = extract_between("var x = {}", "var x = ", "</script>").unwrap_err();
		assert!(matches!(err, Error::MarkerNotFound("</script>")));
	}

	#[test]
	fn title_cases_words() {
		assert_eq!(title_case("hip-hop"), "Hip-Hop");
		assert_eq!(title_case("DEEP house"), "Deep House");
		assert_eq!(title_case("r&b"), "R&B");
		assert_eq!(title_case(""), "");
	}

	#[test]
	fn humanizes_slugs() {
		assert_eq!(humanize_slug("on-demand"), "On Demand");
		assert_eq!(humanize_slug("channels"), "Channels");
	}

	#[test]
	fn adds_scheme_to_protocol_relative_urls() {
		assert_eq!(with_scheme("//img.example/a.jpg"), "http://img.example/a.jpg");
		assert_eq!(with_scheme("https://img.example/a.jpg"), "https://img.example/a.jpg");
	}
}
