use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

use issue2md::RenderOptions;
use issue2md::markdown::render;
use issue2md::types::{Comment, Identity, Reaction, ThreadHeader, ThreadKind};

fn header() -> ThreadHeader {
    ThreadHeader {
        kind: ThreadKind::Issue,
        title: "Crash on start".to_owned(),
        body: "It crashes when `--verbose` is set.".to_owned(),
        number: 42,
        url: "https://api.github.com/repos/acme/widgets/issues/42".to_owned(),
        author: Identity::new("octocat"),
        comment_count: 2,
    }
}

fn reaction(content: &str, login: &str) -> Reaction {
    Reaction {
        content: content.to_owned(),
        user: Identity::new(login),
    }
}

fn comments(reactions: Vec<Reaction>) -> Vec<Comment> {
    vec![
        Comment {
            id: 1,
            body: "Same here.".to_owned(),
            author: Identity::new("hubot"),
            reactions,
        },
        Comment {
            id: 2,
            body: "Fixed in main.".to_owned(),
            author: Identity::new("octocat"),
            reactions: vec![],
        },
    ]
}

fn all_options() -> RenderOptions {
    RenderOptions {
        include_reactions: true,
        include_author_links: true,
    }
}

/// Collect `(level, text)` for every heading in the document.
fn headings(markdown: &str) -> Vec<(HeadingLevel, String)> {
    let mut out = Vec::new();
    let mut current: Option<(HeadingLevel, String)> = None;
    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => current = Some((level, String::new())),
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => out.extend(current.take()),
            _ => {}
        }
    }
    out
}

/// Labels of the reaction groups, in rendered order.
fn group_labels(markdown: &str) -> Vec<String> {
    markdown
        .lines()
        .filter_map(|line| line.strip_prefix("- :"))
        .filter_map(|rest| rest.split_once(": by "))
        .map(|(label, _)| label.to_owned())
        .collect()
}

#[test]
fn heading_structure_parses_as_markdown() {
    let markdown = render(&header(), &comments(vec![]), &RenderOptions::default());
    assert_eq!(
        headings(&markdown),
        vec![
            (HeadingLevel::H1, "Crash on start".to_owned()),
            (HeadingLevel::H2, "Description".to_owned()),
            (HeadingLevel::H2, "Comments".to_owned()),
            (HeadingLevel::H3, "Comment 1 by hubot".to_owned()),
            (HeadingLevel::H3, "Comment 2 by octocat".to_owned()),
        ]
    );
}

#[test]
fn zero_comments_has_no_comments_heading() {
    let markdown = render(&header(), &[], &all_options());
    let levels: Vec<HeadingLevel> = headings(&markdown).into_iter().map(|(l, _)| l).collect();
    assert_eq!(levels, vec![HeadingLevel::H1, HeadingLevel::H2]);
    assert!(!markdown.contains("## Comments"));
}

#[test]
fn rendering_is_idempotent() {
    let input = comments(vec![reaction("heart", "a"), reaction("+1", "b")]);
    let first = render(&header(), &input, &all_options());
    let second = render(&header(), &input, &all_options());
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn plus_one_sorts_before_heart() {
    let input = comments(vec![
        reaction("heart", "carol"),
        reaction("+1", "alice"),
        reaction("+1", "bob"),
    ]);
    let options = RenderOptions {
        include_reactions: true,
        include_author_links: false,
    };
    let markdown = render(&header(), &input, &options);

    assert_eq!(group_labels(&markdown), vec!["+1", "heart"]);
    assert!(markdown.contains(
        "**Reactions:**\n- :+1: by 2 user(s):\n  - alice\n  - bob\n- :heart: by 1 user(s):\n  - carol\n\n"
    ));
}

#[test]
fn group_order_independent_of_arrival_order() {
    let base = vec![
        reaction("rocket", "r1"),
        reaction("eyes", "e1"),
        reaction("laugh", "l1"),
        reaction("eyes", "e2"),
        reaction("-1", "m1"),
        reaction("rocket", "r2"),
    ];
    let options = RenderOptions {
        include_reactions: true,
        include_author_links: false,
    };

    // Every rotation of the list renders the same sorted label order, and
    // voters within a group keep their relative order from the input.
    for shift in 0..base.len() {
        let mut rotated = base.clone();
        rotated.rotate_left(shift);
        let markdown = render(&header(), &comments(rotated.clone()), &options);
        assert_eq!(group_labels(&markdown), vec!["-1", "eyes", "laugh", "rocket"]);

        let eyes: Vec<&str> = rotated
            .iter()
            .filter(|r| r.content == "eyes")
            .map(|r| r.user.login.as_str())
            .collect();
        let expected_block = format!(
            "- :eyes: by 2 user(s):\n  - {}\n  - {}\n",
            eyes[0], eyes[1]
        );
        assert!(markdown.contains(&expected_block), "{markdown}");
    }
}

#[test]
fn author_links_toggle() {
    let input = comments(vec![reaction("eyes", "voter")]);
    let bare = render(
        &header(),
        &input,
        &RenderOptions {
            include_reactions: true,
            include_author_links: false,
        },
    );
    assert!(!bare.contains("](https://github.com/"));
    assert!(bare.contains("**Created by**: octocat\n"));
    assert!(bare.contains("  - voter\n"));

    let linked = render(&header(), &input, &all_options());
    for login in ["octocat", "hubot", "voter"] {
        assert!(
            linked.contains(&format!("[{login}](https://github.com/{login})")),
            "{login} should be linked in {linked}"
        );
    }
    assert!(!linked.contains("**Created by**: octocat\n"));
}

#[test]
fn comment_indices_follow_assembled_order() {
    let many: Vec<Comment> = (1..=12)
        .map(|i| Comment {
            id: 100 + i,
            body: format!("body {i}"),
            author: Identity::new(format!("user{i}")),
            reactions: vec![],
        })
        .collect();
    let markdown = render(&header(), &many, &RenderOptions::default());
    assert!(markdown.contains("### Comment 12 by user12\n\nbody 12\n"));
    assert!(markdown.contains("### Comment 1 by user1\n\nbody 1\n"));
}
