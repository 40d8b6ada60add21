//! The ten limerick templates. Each is a pure function of the name and the
//! rhyme word, so a given template always renders the same five lines.

use crate::core::name::capitalize;
use crate::domain::model::{Limerick, Name};
use rand::Rng;

pub type Template = fn(&str, &str) -> Limerick;

pub const TEMPLATES: [Template; 10] = [
    martian,
    secret_passion,
    unicorn_pet,
    crotchety_coder,
    if_you_ever_meet,
    collection,
    old_farmer,
    wild_child,
    irrepressible_cat,
    bad_habit,
];

fn limerick(lines: [String; 5]) -> Limerick {
    Limerick { lines }
}

fn article(word: &str) -> &'static str {
    match word.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

fn martian(name: &str, rhyme: &str) -> Limerick {
    limerick([
        format!("I met a martian called {name}"),
        format!("Who had a strange addiction to {rhyme}"),
        "When I asked, \"Why on Earth?\"".to_string(),
        format!("{name} cried out with mirth"),
        format!("\"Why else but for the {rhyme}?\""),
    ])
}

fn secret_passion(name: &str, rhyme: &str) -> Limerick {
    let article = article(rhyme);
    limerick([
        format!("This is the curious story of {name}"),
        format!("Whose secret passion was to be {article} {rhyme}"),
        "Each day and night".to_string(),
        format!("{name} sighed and sighed—"),
        format!("\"If only I could have been {article} {rhyme}!\""),
    ])
}

fn unicorn_pet(name: &str, rhyme: &str) -> Limerick {
    let pet = capitalize(rhyme);
    limerick([
        format!("There once lived a unicorn {name}"),
        format!("Who had a pet {pet}"),
        format!("{name} loved it so much"),
        "They'd let no one else touch".to_string(),
        format!("Their sweet little pet, {pet}"),
    ])
}

fn crotchety_coder(name: &str, rhyme: &str) -> Limerick {
    limerick([
        format!("A crotchety coder named {name}"),
        format!("Loved nothing more than {rhyme}"),
        "Nothing could be worse–-".to_string(),
        format!("It made {name} curse and curse"),
        format!("–-Than when {name} ran out of {rhyme}"),
    ])
}

fn if_you_ever_meet(name: &str, rhyme: &str) -> Limerick {
    limerick([
        format!("If you ever meet {name}"),
        format!("Do ask them about {rhyme}"),
        format!("{name} denies this, of course—"),
        "But I'd bet a horse!—".to_string(),
        format!("That {name} still has my {rhyme}!"),
    ])
}

fn collection(name: &str, rhyme: &str) -> Limerick {
    limerick([
        format!("Let me tell you about {name}"),
        format!("And {name}'s collection of {rhyme}s"),
        "You'd scarcely believe".to_string(),
        format!("That {name} can live"),
        format!("While their house is overrun with {rhyme}s"),
    ])
}

fn old_farmer(name: &str, rhyme: &str) -> Limerick {
    let shout = capitalize(rhyme);
    limerick([
        format!("This old farmer called {name}"),
        format!("Loved to exclaim, \"{shout}!\""),
        "Early each morn".to_string(),
        format!("{name}'d look upon their corn"),
        format!("And announce with delight, \"{shout}!\""),
    ])
}

fn wild_child(name: &str, rhyme: &str) -> Limerick {
    limerick([
        format!("Old {name} as a young child"),
        "Was more than a good bit wild".to_string(),
        format!("The elders'd cry, 'Oh {name}!"),
        format!("If only you were more like {}!'", capitalize(rhyme)),
        format!("But {name} had already taken flight"),
    ])
}

fn irrepressible_cat(name: &str, rhyme: &str) -> Limerick {
    limerick([
        format!("{name} was an irrepressible cat"),
        "Who'd steal anything it could get at".to_string(),
        format!("The neighbors often saw {name}"),
        format!("Crouched with a bowl of {rhyme}"),
        "And think, \"Oh, THAT'S what became of that!\"".to_string(),
    ])
}

fn bad_habit(name: &str, rhyme: &str) -> Limerick {
    limerick([
        format!("If you've ever come across {name}"),
        format!("You'd better hide your {rhyme}"),
        "As rumor would have it".to_string(),
        format!("{name} has a bad habit"),
        format!("Of quickly parting fools from their {rhyme}"),
    ])
}

/// Renders with the template at `index` (zero-based), if there is one.
pub fn render_with(index: usize, name: &Name, rhyme: &str) -> Option<Limerick> {
    TEMPLATES
        .get(index)
        .map(|template| template(name.as_str(), rhyme))
}

/// Renders with a template chosen uniformly at random.
pub fn render<R: Rng>(rng: &mut R, name: &Name, rhyme: &str) -> Limerick {
    let index = rng.random_range(0..TEMPLATES.len());
    tracing::debug!("Using limerick template {}", index + 1);
    TEMPLATES[index](name.as_str(), rhyme)
}
