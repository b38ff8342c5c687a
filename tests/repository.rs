use trivia_api::domain::types::{CategoryId, QuestionId};
use trivia_api::repository::{
    CategoryReader, DieselRepository, QuestionListQuery, QuestionReader, QuestionWriter,
};

mod common;

#[test]
fn migrations_seed_the_reference_categories() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let categories = repo.list_categories().expect("should list categories");

    assert_eq!(categories.len(), 6);
    assert_eq!(categories[0].id, 1);
    assert_eq!(categories[0].label.as_str(), "Science");
    assert_eq!(categories[5].label.as_str(), "Sports");

    let art = repo
        .get_category_by_id(CategoryId::new(2).unwrap())
        .expect("should get category")
        .expect("category 2 should exist");
    assert_eq!(art.label.as_str(), "Art");

    assert!(
        repo.get_category_by_id(CategoryId::new(99).unwrap())
            .expect("should query category")
            .is_none()
    );
}

#[test]
fn create_assigns_id_and_roundtrips() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_question(&common::new_question("Who painted the Mona Lisa?", 2, 1))
        .expect("should create question");

    let fetched = repo
        .get_question_by_id(created.id)
        .expect("should get question")
        .expect("created question should exist");

    assert_eq!(fetched, created);
    assert_eq!(fetched.question.as_str(), "Who painted the Mona Lisa?");
    assert_eq!(fetched.category_id, 2);
}

#[test]
fn listing_paginates_in_id_order() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    for n in 1..=13 {
        repo.create_question(&common::new_question(&format!("Question number {n}"), 1, 1))
            .expect("should create question");
    }

    let (total, first_page) = repo
        .list_questions(QuestionListQuery::default().paginate(1, 10))
        .expect("should list questions");
    assert_eq!(total, 13);
    assert_eq!(first_page.len(), 10);
    let ids: Vec<i32> = first_page.iter().map(|q| q.id.get()).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<i32>>());

    let (_, second_page) = repo
        .list_questions(QuestionListQuery::default().paginate(2, 10))
        .expect("should list questions");
    assert_eq!(second_page.len(), 3);

    let (_, past_the_end) = repo
        .list_questions(QuestionListQuery::default().paginate(3, 10))
        .expect("should list questions");
    assert!(past_the_end.is_empty());
}

#[test]
fn search_matches_substrings_case_insensitively() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_question(&common::new_question(
        "Which country won the 2018 World Cup?",
        6,
        2,
    ))
    .expect("should create question");
    repo.create_question(&common::new_question(
        "When was the first world cup held?",
        6,
        3,
    ))
    .expect("should create question");
    repo.create_question(&common::new_question("Who painted the Mona Lisa?", 2, 1))
        .expect("should create question");

    let (total, matches) = repo
        .list_questions(QuestionListQuery::default().search("world cup"))
        .expect("should search questions");

    assert_eq!(total, 2);
    assert!(
        matches
            .iter()
            .all(|q| q.question.as_str().to_lowercase().contains("world cup"))
    );

    let (none_total, none) = repo
        .list_questions(QuestionListQuery::default().search("cricket"))
        .expect("should search questions");
    assert_eq!(none_total, 0);
    assert!(none.is_empty());
}

#[test]
fn category_and_exclusion_filters_compose() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    for n in 1..=4 {
        let category = if n % 2 == 0 { 2 } else { 1 };
        repo.create_question(&common::new_question(
            &format!("Question number {n}"),
            category,
            1,
        ))
        .expect("should create question");
    }

    let (total, science) = repo
        .list_questions(QuestionListQuery::default().category(CategoryId::new(1).unwrap()))
        .expect("should list questions");
    assert_eq!(total, 2);
    assert!(science.iter().all(|q| q.category_id == 1));

    let excluded = vec![science[0].id];
    let (remaining_total, remaining) = repo
        .list_questions(
            QuestionListQuery::default()
                .category(CategoryId::new(1).unwrap())
                .exclude(excluded.clone()),
        )
        .expect("should list questions");
    assert_eq!(remaining_total, 1);
    assert!(remaining.iter().all(|q| !excluded.contains(&q.id)));
}

#[test]
fn delete_removes_the_row_permanently() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_question(&common::new_question("Who discovered penicillin?", 1, 3))
        .expect("should create question");

    let affected = repo
        .delete_question(created.id)
        .expect("should delete question");
    assert_eq!(affected, 1);

    assert!(
        repo.get_question_by_id(created.id)
            .expect("should query question")
            .is_none()
    );

    let affected = repo
        .delete_question(QuestionId::new(999).unwrap())
        .expect("delete of a missing row should not fail");
    assert_eq!(affected, 0);
}
