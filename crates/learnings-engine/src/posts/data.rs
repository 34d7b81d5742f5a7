use super::LearningPost;

/// Every published post. Bodies live in `content/` next to `Cargo.toml`.
pub static POSTS: [LearningPost; 3] = [
    LearningPost {
        id: 1,
        title: "Lorem Ipsum Dolor Sit Amet",
        excerpt: "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
        content: include_str!("../../content/lorem-ipsum-dolor-sit-amet.md"),
        date: "2025-01-20",
        read_time: "4 min read",
        category: "Lorem Ipsum",
        slug: "lorem-ipsum-dolor-sit-amet",
    },
    LearningPost {
        id: 2,
        title: "Rendering Markdown by Hand",
        excerpt: "Why a blog with six block types doesn't need a full markdown engine, and what a line scanner gets right.",
        content: include_str!("../../content/rendering-markdown-by-hand.md"),
        date: "2025-02-14",
        read_time: "5 min read",
        category: "Web Development",
        slug: "rendering-markdown-by-hand",
    },
    LearningPost {
        id: 3,
        title: "Making Search Feel Smart Without AI",
        excerpt: "Fuzzy matching, weighted keys and a few thresholds go a long way before you need embeddings.",
        content: include_str!("../../content/making-search-feel-smart-without-ai.md"),
        date: "2025-03-08",
        read_time: "6 min read",
        category: "Web Development",
        slug: "making-search-feel-smart-without-ai",
    },
];
