#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todd::db::todos::Todos;
    use todd::libs::todo::{DeleteSelector, EditStatus, TodoFilter};

    struct TodoTestContext {
        _temp_dir: TempDir,
        db_file: PathBuf,
    }

    impl TestContext for TodoTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_file = temp_dir.path().join("todd.db");
            TodoTestContext { _temp_dir: temp_dir, db_file }
        }
    }

    fn tag_list(list: &[&str]) -> Vec<String> {
        list.iter().map(|tag| tag.to_string()).collect()
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_add_then_get(ctx: &mut TodoTestContext) {
        let mut todos = Todos::new(&ctx.db_file).unwrap();

        let id = todos.add("buy milk", &tag_list(&["errand", "food"])).unwrap();
        assert_eq!(id, 1);

        let todo = todos.get(id).unwrap().unwrap();
        assert_eq!(todo.id, 1);
        assert_eq!(todo.body, "buy milk");
        assert_eq!(todo.tags, tag_list(&["errand", "food"]));
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_add_assigns_sequential_ids(ctx: &mut TodoTestContext) {
        let mut todos = Todos::new(&ctx.db_file).unwrap();

        assert_eq!(todos.add("first", &[]).unwrap(), 1);
        assert_eq!(todos.add("second", &[]).unwrap(), 2);
        assert_eq!(todos.add("third", &[]).unwrap(), 3);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_get_missing_returns_none(ctx: &mut TodoTestContext) {
        let mut todos = Todos::new(&ctx.db_file).unwrap();

        todos.add("only one", &[]).unwrap();
        assert!(todos.get(3).unwrap().is_none());
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_multiline_body_stored_verbatim(ctx: &mut TodoTestContext) {
        let mut todos = Todos::new(&ctx.db_file).unwrap();

        let body = "first line\nsecond line\n\nfourth line";
        let id = todos.add(body, &[]).unwrap();

        let todo = todos.get(id).unwrap().unwrap();
        assert_eq!(todo.body, body);
        assert_eq!(todo.first_line(), "first line");
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_untagged_entry_has_no_tags(ctx: &mut TodoTestContext) {
        let mut todos = Todos::new(&ctx.db_file).unwrap();

        let id = todos.add("no tags here", &[]).unwrap();
        let todo = todos.get(id).unwrap().unwrap();
        assert!(todo.tags.is_empty());
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_count_tracks_adds_and_deletes(ctx: &mut TodoTestContext) {
        let mut todos = Todos::new(&ctx.db_file).unwrap();
        assert_eq!(todos.count().unwrap(), 0);

        todos.add("one", &[]).unwrap();
        assert_eq!(todos.count().unwrap(), 1);
        todos.add("two", &[]).unwrap();
        assert_eq!(todos.count().unwrap(), 2);

        let affected = todos.delete(&DeleteSelector::by_ids(vec![1])).unwrap();
        assert_eq!(affected, 1);
        assert_eq!(todos.count().unwrap(), 1);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_schema_creation_is_idempotent(ctx: &mut TodoTestContext) {
        let mut todos = Todos::new(&ctx.db_file).unwrap();
        todos.add("survives reopening", &tag_list(&["keep"])).unwrap();
        drop(todos);

        let mut reopened = Todos::new(&ctx.db_file).unwrap();
        assert_eq!(reopened.count().unwrap(), 1);
        let todo = reopened.get(1).unwrap().unwrap();
        assert_eq!(todo.body, "survives reopening");
        assert_eq!(todo.tags, tag_list(&["keep"]));
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_ids_not_reused_after_delete(ctx: &mut TodoTestContext) {
        let mut todos = Todos::new(&ctx.db_file).unwrap();

        todos.add("first", &[]).unwrap();
        let second = todos.add("second", &[]).unwrap();
        todos.delete(&DeleteSelector::by_ids(vec![second])).unwrap();

        let third = todos.add("third", &[]).unwrap();
        assert_eq!(third, 3);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_open_in_missing_directory_fails(ctx: &mut TodoTestContext) {
        let bad_path = ctx.db_file.parent().unwrap().join("no_such_dir").join("todd.db");
        assert!(Todos::new(&bad_path).is_err());
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_edit_body_only(ctx: &mut TodoTestContext) {
        let mut todos = Todos::new(&ctx.db_file).unwrap();
        let id = todos.add("body", &tag_list(&["test", "tags"])).unwrap();

        let status = todos.edit(id, Some("changed body"), None).unwrap();
        assert_eq!(status, EditStatus::Updated);

        let todo = todos.get(id).unwrap().unwrap();
        assert_eq!(todo.body, "changed body");
        assert_eq!(todo.tags, tag_list(&["test", "tags"]));
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_edit_tags_only_replaces_them(ctx: &mut TodoTestContext) {
        let mut todos = Todos::new(&ctx.db_file).unwrap();
        let id = todos.add("body", &tag_list(&["test", "tags"])).unwrap();

        let status = todos.edit(id, None, Some(&tag_list(&["notag"]))).unwrap();
        assert_eq!(status, EditStatus::Updated);

        let todo = todos.get(id).unwrap().unwrap();
        assert_eq!(todo.body, "body");
        assert_eq!(todo.tags, tag_list(&["notag"]));
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_edit_can_clear_tags(ctx: &mut TodoTestContext) {
        let mut todos = Todos::new(&ctx.db_file).unwrap();
        let id = todos.add("body", &tag_list(&["tag"])).unwrap();

        todos.edit(id, None, Some(&[])).unwrap();
        assert!(todos.get(id).unwrap().unwrap().tags.is_empty());
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_edit_missing_id_returns_not_found(ctx: &mut TodoTestContext) {
        let mut todos = Todos::new(&ctx.db_file).unwrap();
        todos.add("body", &[]).unwrap();

        let status = todos.edit(2, Some("changed body"), None).unwrap();
        assert_eq!(status, EditStatus::NotFound);

        // The existing entry is untouched.
        assert_eq!(todos.get(1).unwrap().unwrap().body, "body");
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_delete_by_id(ctx: &mut TodoTestContext) {
        let mut todos = Todos::new(&ctx.db_file).unwrap();
        todos.add("todo 1", &tag_list(&["tag1", "tags"])).unwrap();
        todos.add("todo 2", &tag_list(&["tag2", "tags"])).unwrap();

        assert_eq!(todos.delete(&DeleteSelector::by_ids(vec![1])).unwrap(), 1);
        assert_eq!(todos.count().unwrap(), 1);
        assert_eq!(todos.delete(&DeleteSelector::by_ids(vec![2])).unwrap(), 1);
        assert_eq!(todos.count().unwrap(), 0);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_delete_missing_id_is_noop(ctx: &mut TodoTestContext) {
        let mut todos = Todos::new(&ctx.db_file).unwrap();
        todos.add("keep me", &[]).unwrap();

        let affected = todos.delete(&DeleteSelector::by_ids(vec![42])).unwrap();
        assert_eq!(affected, 0);
        assert_eq!(todos.count().unwrap(), 1);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_delete_empty_selector_fails(ctx: &mut TodoTestContext) {
        let mut todos = Todos::new(&ctx.db_file).unwrap();
        todos.add("keep me", &[]).unwrap();

        assert!(todos.delete(&DeleteSelector::default()).is_err());
        assert_eq!(todos.count().unwrap(), 1);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_delete_by_tags_or_semantics(ctx: &mut TodoTestContext) {
        let mut todos = Todos::new(&ctx.db_file).unwrap();
        todos.add("a", &tag_list(&["x"])).unwrap();
        todos.add("b", &tag_list(&["y"])).unwrap();
        todos.add("c", &tag_list(&["z"])).unwrap();

        let affected = todos.delete(&DeleteSelector::by_tags(tag_list(&["x", "y"]))).unwrap();
        assert_eq!(affected, 2);

        let remaining = todos.fetch(TodoFilter::All).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].body, "c");
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_delete_union_of_ids_and_tags(ctx: &mut TodoTestContext) {
        let mut todos = Todos::new(&ctx.db_file).unwrap();
        todos.add("by id", &[]).unwrap();
        todos.add("by tag", &tag_list(&["x"])).unwrap();
        todos.add("untouched", &tag_list(&["y"])).unwrap();

        let selector = DeleteSelector::new(vec![1], tag_list(&["x"]));
        assert_eq!(todos.delete(&selector).unwrap(), 2);

        let remaining = todos.fetch(TodoFilter::All).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].body, "untouched");
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_delete_overlapping_id_and_tag_counts_once(ctx: &mut TodoTestContext) {
        let mut todos = Todos::new(&ctx.db_file).unwrap();
        let id = todos.add("both match", &tag_list(&["x"])).unwrap();

        let selector = DeleteSelector::new(vec![id], tag_list(&["x"]));
        assert_eq!(todos.delete(&selector).unwrap(), 1);
        assert_eq!(todos.count().unwrap(), 0);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_fetch_orders_by_id(ctx: &mut TodoTestContext) {
        let mut todos = Todos::new(&ctx.db_file).unwrap();
        todos.add("a", &[]).unwrap();
        todos.add("b", &[]).unwrap();
        todos.add("c", &[]).unwrap();

        let all = todos.fetch(TodoFilter::All).unwrap();
        let ids: Vec<i64> = all.iter().map(|todo| todo.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_fetch_by_tags_filter(ctx: &mut TodoTestContext) {
        let mut todos = Todos::new(&ctx.db_file).unwrap();
        todos.add("a", &tag_list(&["work"])).unwrap();
        todos.add("b", &tag_list(&["home"])).unwrap();
        todos.add("c", &tag_list(&["work", "home"])).unwrap();
        todos.add("d", &[]).unwrap();

        let filtered = todos.fetch(TodoFilter::ByTags(tag_list(&["home"]))).unwrap();
        let bodies: Vec<&str> = filtered.iter().map(|todo| todo.body.as_str()).collect();
        assert_eq!(bodies, vec!["b", "c"]);

        // OR semantics: any of the given tags qualifies.
        let filtered = todos.fetch(TodoFilter::ByTags(tag_list(&["work", "home"]))).unwrap();
        assert_eq!(filtered.len(), 3);
    }
}
