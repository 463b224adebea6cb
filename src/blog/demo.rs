use super::responses::{BlogCategory, BlogImage, BlogList, BlogPost};

/// Seed articles served while no CMS account is wired up, so the blog
/// pages render real-looking content out of the box.
pub fn demo_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "1".to_string(),
            title: "発表会に向けて練習中です".to_string(),
            content: r#"<p>来月の発表会に向けて、生徒さんたちが一生懸命練習しています。</p>
<p>今年のテーマは「世界の名曲」。クラシックからポピュラーまで、様々なジャンルの曲に挑戦しています。</p>
<p>毎回のレッスンで、少しずつ上達していく姿を見るのが本当に嬉しいです。</p>
<h2>発表会の詳細</h2>
<ul>
<li>日時：2025年2月23日（日）14:00開演</li>
<li>場所：○○市民会館 小ホール</li>
<li>入場無料</li>
</ul>
<p>ご家族やお友達もぜひお越しください！</p>"#
                .to_string(),
            excerpt: "来月の発表会に向けて、生徒さんたちが一生懸命練習しています。今年のテーマは「世界の名曲」。"
                .to_string(),
            thumbnail: Some(BlogImage {
                url: "/Images/blog-recital.png".to_string(),
                width: 1740,
                height: 1156,
            }),
            category: BlogCategory {
                id: "event".to_string(),
                name: "イベント".to_string(),
            },
            published_at: "2025-01-20T10:00:00.000Z".to_string(),
            created_at: "2025-01-20T10:00:00.000Z".to_string(),
            updated_at: "2025-01-20T10:00:00.000Z".to_string(),
        },
        BlogPost {
            id: "2".to_string(),
            title: "新しい教材を導入しました".to_string(),
            content: r#"<p>初心者の方にもわかりやすい、新しい教材を導入しました。</p>
<p>「ピアノアドベンチャー」シリーズは、アメリカで大人気の教材。楽しいイラストと音楽理論がバランスよく学べます。</p>
<h2>新教材の特徴</h2>
<ul>
<li>カラフルなイラストで楽しく学べる</li>
<li>音楽理論も自然に身につく</li>
<li>付属CDで家でも練習できる</li>
</ul>
<p>体験レッスンでも使用しますので、ぜひお試しください！</p>"#
                .to_string(),
            excerpt: "初心者の方にもわかりやすい、新しい教材を導入しました。楽しみながら上達できます。"
                .to_string(),
            thumbnail: Some(BlogImage {
                url: "/Images/blog-textbook.png".to_string(),
                width: 1740,
                height: 1156,
            }),
            category: BlogCategory {
                id: "lesson".to_string(),
                name: "レッスン".to_string(),
            },
            published_at: "2025-01-15T10:00:00.000Z".to_string(),
            created_at: "2025-01-15T10:00:00.000Z".to_string(),
            updated_at: "2025-01-15T10:00:00.000Z".to_string(),
        },
        BlogPost {
            id: "3".to_string(),
            title: "クリスマスコンサートを開催しました".to_string(),
            content: r#"<p>先日、教室でクリスマスコンサートを開催しました。</p>
<p>生徒さんたちの素敵な演奏に、会場は温かい拍手に包まれました。</p>
<p>サプライズで先生からのプレゼント演奏もあり、とても楽しいひとときとなりました。</p>
<h2>演奏曲目より</h2>
<ul>
<li>きよしこの夜</li>
<li>ジングルベル</li>
<li>赤鼻のトナカイ</li>
<li>アナと雪の女王メドレー</li>
</ul>
<p>ご参加いただいた皆様、ありがとうございました！</p>"#
                .to_string(),
            excerpt: "先日、教室でクリスマスコンサートを開催しました。生徒さんたちの素敵な演奏をお届けしました。"
                .to_string(),
            thumbnail: Some(BlogImage {
                url: "/Images/blog-christmas.png".to_string(),
                width: 1740,
                height: 1156,
            }),
            category: BlogCategory {
                id: "event".to_string(),
                name: "イベント".to_string(),
            },
            published_at: "2025-01-10T10:00:00.000Z".to_string(),
            created_at: "2025-01-10T10:00:00.000Z".to_string(),
            updated_at: "2025-01-10T10:00:00.000Z".to_string(),
        },
        BlogPost {
            id: "4".to_string(),
            title: "冬休みの練習のコツ".to_string(),
            content: r#"<p>冬休み中も、ピアノの練習を続けましょう！</p>
<p>毎日長時間練習する必要はありません。短い時間でも、毎日続けることが大切です。</p>
<h2>練習のポイント</h2>
<ol>
<li><strong>毎日15分から</strong> - 短い時間でOK。継続が大事</li>
<li><strong>ゆっくり丁寧に</strong> - テンポを落として正確に</li>
<li><strong>部分練習を</strong> - 苦手な部分を重点的に</li>
<li><strong>録音してみよう</strong> - 客観的に聴いてみよう</li>
</ol>
<p>わからないことがあれば、次のレッスンで聞いてくださいね！</p>"#
                .to_string(),
            excerpt: "冬休み中も、ピアノの練習を続けましょう！毎日短い時間でも続けることが大切です。"
                .to_string(),
            thumbnail: None,
            category: BlogCategory {
                id: "tips".to_string(),
                name: "練習のコツ".to_string(),
            },
            published_at: "2025-01-05T10:00:00.000Z".to_string(),
            created_at: "2025-01-05T10:00:00.000Z".to_string(),
            updated_at: "2025-01-05T10:00:00.000Z".to_string(),
        },
        BlogPost {
            id: "5".to_string(),
            title: "新年のご挨拶".to_string(),
            content: r#"<p>明けましておめでとうございます。</p>
<p>旧年中は大変お世話になりました。今年も生徒さん一人ひとりに寄り添った丁寧なレッスンを心がけてまいります。</p>
<p>本年もどうぞよろしくお願いいたします。</p>
<h2>2025年の目標</h2>
<ul>
<li>発表会を2回開催</li>
<li>新しいコースの開設</li>
<li>オンラインレッスンの充実</li>
</ul>
<p>今年も一緒に音楽を楽しみましょう！</p>"#
                .to_string(),
            excerpt: "明けましておめでとうございます。本年もどうぞよろしくお願いいたします。".to_string(),
            thumbnail: None,
            category: BlogCategory {
                id: "news".to_string(),
                name: "お知らせ".to_string(),
            },
            published_at: "2025-01-01T00:00:00.000Z".to_string(),
            created_at: "2025-01-01T00:00:00.000Z".to_string(),
            updated_at: "2025-01-01T00:00:00.000Z".to_string(),
        },
    ]
}

pub fn demo_list(limit: usize, offset: usize) -> BlogList {
    let all = demo_posts();
    let total_count = all.len();
    let contents = all.into_iter().skip(offset).take(limit).collect();
    BlogList {
        contents,
        total_count,
        offset,
        limit,
    }
}

pub fn demo_post(id: &str) -> Option<BlogPost> {
    demo_posts().into_iter().find(|post| post.id == id)
}
