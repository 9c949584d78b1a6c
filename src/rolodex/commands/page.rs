use crate::commands::{CmdMessage, CmdResult, PageInfo};
use crate::error::Result;
use crate::store::ContactStore;

/// Fixed window size of a directory page.
pub const PAGE_SIZE: usize = 5;

pub fn run<S: ContactStore>(store: &S, page: usize) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if page == 0 {
        result.add_message(CmdMessage::error("Page numbers start at 1"));
        return Ok(result);
    }

    let contacts = store.load()?;
    let start = (page - 1) * PAGE_SIZE;
    if start >= contacts.len() {
        result.add_message(CmdMessage::warning(format!("Page {} not found", page)));
        return Ok(result);
    }

    let total = contacts.len().div_ceil(PAGE_SIZE);
    let end = (start + PAGE_SIZE).min(contacts.len());
    Ok(result
        .with_listed(contacts[start..end].to_vec())
        .with_page(PageInfo {
            number: page,
            total,
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_first_page_of_small_directory() {
        let fixture = StoreFixture::new().with_contacts(3);
        let result = run(&fixture.store, 1).unwrap();

        assert_eq!(result.listed.len(), 3);
        assert_eq!(result.page, Some(PageInfo { number: 1, total: 1 }));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_last_page_is_partial() {
        let fixture = StoreFixture::new().with_contacts(12);

        let first = run(&fixture.store, 1).unwrap();
        assert_eq!(first.listed.len(), 5);
        assert_eq!(first.listed[0].pk, 1);

        let last = run(&fixture.store, 3).unwrap();
        assert_eq!(last.listed.len(), 2);
        assert_eq!(last.listed[0].pk, 11);
        assert_eq!(last.page, Some(PageInfo { number: 3, total: 3 }));
    }

    #[test]
    fn test_page_past_the_end_not_found() {
        let fixture = StoreFixture::new().with_contacts(5);

        let result = run(&fixture.store, 2).unwrap();
        assert!(result.listed.is_empty());
        assert!(result.page.is_none());
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
        assert!(result.messages[0].content.contains("Page 2 not found"));
    }

    #[test]
    fn test_page_one_of_empty_directory_not_found() {
        let fixture = StoreFixture::new();
        let result = run(&fixture.store, 1).unwrap();
        assert!(result.listed.is_empty());
        assert!(result.messages[0].content.contains("not found"));
    }

    #[test]
    fn test_page_zero_is_invalid() {
        let fixture = StoreFixture::new().with_contacts(3);
        let result = run(&fixture.store, 0).unwrap();

        assert!(result.listed.is_empty());
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
        assert!(result.messages[0].content.contains("start at 1"));
    }
}
