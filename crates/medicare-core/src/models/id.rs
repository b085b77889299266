//! Record identities and caller-side id coercion.

/// Integer identity assigned to a row when it is created.
pub type RecordId = u64;

/// Anything a caller may hand in as a record identity.
///
/// UI layers often carry ids as text (form values, query strings). Text is
/// read as an integer prefix: leading whitespace and one sign character are
/// skipped, then the leading digits are taken, so `"12abc"` is `12`. Text with
/// no leading digits, and negative numbers, have no identity and behave as
/// "not found" in every lookup.
pub trait ToRecordId {
    fn to_record_id(&self) -> Option<RecordId>;
}

impl ToRecordId for u64 {
    fn to_record_id(&self) -> Option<RecordId> {
        Some(*self)
    }
}

impl ToRecordId for u32 {
    fn to_record_id(&self) -> Option<RecordId> {
        Some(RecordId::from(*self))
    }
}

impl ToRecordId for usize {
    fn to_record_id(&self) -> Option<RecordId> {
        RecordId::try_from(*self).ok()
    }
}

impl ToRecordId for i64 {
    fn to_record_id(&self) -> Option<RecordId> {
        RecordId::try_from(*self).ok()
    }
}

impl ToRecordId for i32 {
    fn to_record_id(&self) -> Option<RecordId> {
        RecordId::try_from(*self).ok()
    }
}

impl ToRecordId for str {
    fn to_record_id(&self) -> Option<RecordId> {
        parse_id_prefix(self)
    }
}

impl ToRecordId for String {
    fn to_record_id(&self) -> Option<RecordId> {
        parse_id_prefix(self)
    }
}

impl<T: ToRecordId + ?Sized> ToRecordId for &T {
    fn to_record_id(&self) -> Option<RecordId> {
        (**self).to_record_id()
    }
}

fn parse_id_prefix(text: &str) -> Option<RecordId> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let value: RecordId = rest[..digits].parse().ok()?;
    if negative && value != 0 {
        None
    } else {
        Some(value)
    }
}
