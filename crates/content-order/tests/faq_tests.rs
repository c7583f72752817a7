//! Tests for FAQ ordering and category grouping.

use content_order::{group_faqs_by_category, order_faqs, Collation, FaqItem};

/// Helper to build a FAQ entry.
fn faq(path: &str, question: &str, order: Option<f64>) -> FaqItem {
    FaqItem {
        path: path.to_string(),
        question: question.to_string(),
        answer: format!("{} 답변", question),
        category: None,
        order,
    }
}

fn faq_in(path: &str, question: &str, category: &str) -> FaqItem {
    FaqItem {
        category: Some(category.to_string()),
        ..faq(path, question, None)
    }
}

fn questions(items: &[FaqItem]) -> Vec<&str> {
    items.iter().map(|f| f.question.as_str()).collect()
}

fn korean() -> Collation {
    Collation::korean().expect("ko collator must be available")
}

#[test]
fn explicit_order_beats_question_text() {
    let items = vec![
        faq("faqs/b.mdx", "가장 먼저 보일 질문", Some(2.0)),
        faq("faqs/a.mdx", "하하하 마지막 글자 질문", Some(1.0)),
    ];

    let ordered = order_faqs(&items, &korean());

    assert_eq!(ordered[0].order, Some(1.0));
    assert_eq!(ordered[1].order, Some(2.0));
}

#[test]
fn entries_without_order_sort_last() {
    let items = vec![
        faq("faqs/none.mdx", "가", None),
        faq("faqs/ten.mdx", "하", Some(10.0)),
        faq("faqs/one.mdx", "나", Some(1.0)),
    ];

    let ordered = order_faqs(&items, &korean());

    assert_eq!(questions(&ordered), vec!["나", "하", "가"]);
}

#[test]
fn unordered_entries_put_hangul_before_latin() {
    let items = vec![faq("faqs/2.mdx", "ABC", None), faq("faqs/1.mdx", "가나다", None)];
    let reversed: Vec<FaqItem> = items.iter().rev().cloned().collect();

    let ordered = order_faqs(&items, &korean());
    let ordered_rev = order_faqs(&reversed, &korean());

    assert_eq!(questions(&ordered), vec!["가나다", "ABC"]);
    assert_eq!(ordered, ordered_rev, "input order must not matter");
}

#[test]
fn mixed_keys_order_digits_then_hangul_then_latin() {
    let items = vec![
        faq("faqs/a.mdx", "A", None),
        faq("faqs/b.mdx", "가", None),
        faq("faqs/c.mdx", "1번", None),
        faq("faqs/d.mdx", "b", None),
    ];

    let ordered = order_faqs(&items, &korean());

    assert_eq!(questions(&ordered), vec!["1번", "가", "A", "b"]);
}

#[test]
fn negative_zero_order_ties_with_zero() {
    let items = vec![
        faq("faqs/neg.mdx", "나", Some(-0.0)),
        faq("faqs/pos.mdx", "가", Some(0.0)),
    ];

    let ordered = order_faqs(&items, &korean());

    // Same position, so the question decides.
    assert_eq!(questions(&ordered), vec!["가", "나"]);
}

#[test]
fn hangul_questions_in_dictionary_order() {
    let items = vec![
        faq("faqs/3.mdx", "혼자 참여해도 괜찮을까요?", None),
        faq("faqs/1.mdx", "개발 경험이 꼭 있어야 하나요?", None),
        faq("faqs/2.mdx", "노트북을 챙겨야 하나요?", None),
    ];

    let ordered = order_faqs(&items, &korean());

    assert_eq!(
        questions(&ordered),
        vec![
            "개발 경험이 꼭 있어야 하나요?",
            "노트북을 챙겨야 하나요?",
            "혼자 참여해도 괜찮을까요?",
        ]
    );
}

#[test]
fn identical_questions_tie_break_on_path() {
    let items = vec![
        faq("faqs/z.mdx", "같은 질문", None),
        faq("faqs/a.mdx", "같은 질문", None),
    ];

    let ordered = order_faqs(&items, &korean());

    assert_eq!(ordered[0].path, "faqs/a.mdx");
    assert_eq!(ordered[1].path, "faqs/z.mdx");
}

#[test]
fn missing_question_is_treated_as_empty() {
    let items: Vec<FaqItem> = serde_json::from_str(
        r#"[
            {"path": "faqs/q.mdx", "question": "질문"},
            {"path": "faqs/blank.mdx", "answer": "질문 없는 항목"}
        ]"#,
    )
    .unwrap();

    let ordered = order_faqs(&items, &korean());

    assert_eq!(ordered.len(), 2);
    assert_eq!(ordered[0].path, "faqs/blank.mdx");
}

#[test]
fn input_is_not_mutated() {
    let items = vec![faq("faqs/b.mdx", "나", None), faq("faqs/a.mdx", "가", None)];
    let before = items.clone();

    let _ = order_faqs(&items, &korean());

    assert_eq!(items, before);
}

#[test]
fn empty_input_orders_to_empty() {
    assert!(order_faqs(&[], &korean()).is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Category grouping
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn groups_follow_first_appearance_in_ordered_list() {
    let items = vec![
        faq_in("faqs/4.mdx", "라", "참가"),
        faq_in("faqs/1.mdx", "가", "일정"),
        faq_in("faqs/2.mdx", "나", "참가"),
        faq("faqs/3.mdx", "다", None),
    ];

    let groups = group_faqs_by_category(&items, &korean());

    let names: Vec<Option<&str>> = groups.iter().map(|(c, _)| c.as_deref()).collect();
    assert_eq!(names, vec![Some("일정"), Some("참가"), None]);
    assert_eq!(questions(&groups[1].1), vec!["나", "라"]);
    assert_eq!(questions(&groups[2].1), vec!["다"]);
}

#[test]
fn blank_category_groups_with_uncategorized() {
    let items = vec![faq_in("faqs/1.mdx", "가", "  "), faq("faqs/2.mdx", "나", None)];

    let groups = group_faqs_by_category(&items, &korean());

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].0, None);
    assert_eq!(groups[0].1.len(), 2);
}
