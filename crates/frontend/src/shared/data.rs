//! Static page content - the single source of truth for everything the
//! page displays.
//!
//! All three lists are fixed at compile time and never mutated; entries
//! have no identity beyond their position.

/// A cat breed with a one-line description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreedEntry {
    pub name: &'static str,
    pub description: &'static str,
}

/// The five breeds shown in the breeds pane, in display order.
pub const CAT_BREEDS: [BreedEntry; 5] = [
    BreedEntry {
        name: "Siamese",
        description: "Known for their distinctive color points and blue eyes.",
    },
    BreedEntry {
        name: "Maine Coon",
        description: "Large, gentle giants with long, fluffy coats.",
    },
    BreedEntry {
        name: "Persian",
        description: "Recognizable by their flat faces and long, luxurious fur.",
    },
    BreedEntry {
        name: "Bengal",
        description: "Wild-looking cats with leopard-like spots or marbling.",
    },
    BreedEntry {
        name: "Sphynx",
        description: "Hairless cats known for their wrinkled skin and large ears.",
    },
];

/// The five facts shown in the facts pane, in display order.
pub const CAT_FACTS: [&str; 5] = [
    "Cats sleep for about 70% of their lives.",
    "A group of cats is called a clowder.",
    "Cats have over 20 vocalizations, including the meow.",
    "A cat's sense of smell is 14 times stronger than a human's.",
    "Cats can jump up to six times their length.",
];

/// The four carousel images, in display order. Fetched by the browser,
/// never by application code.
pub const CAT_IMAGES: [&str; 4] = [
    "https://upload.wikimedia.org/wikipedia/commons/thumb/3/3a/Cat03.jpg/1200px-Cat03.jpg",
    "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4d/Cat_November_2010-1a.jpg/1200px-Cat_November_2010-1a.jpg",
    "https://upload.wikimedia.org/wikipedia/commons/thumb/b/bb/Kittyply_edit1.jpg/1200px-Kittyply_edit1.jpg",
    "https://upload.wikimedia.org/wikipedia/commons/thumb/5/5e/Sleeping_cat_on_her_back.jpg/1200px-Sleeping_cat_on_her_back.jpg",
];

pub const PAGE_TITLE: &str = "Feline Fascination";

pub const INTRO_TEXT: &str = "Cats are fascinating creatures that have been domesticated for \
thousands of years. They are known for their independence, agility, and affectionate nature. \
Cats come in various breeds, each with unique characteristics and personalities.";

pub const BREEDS_HEADING: &str = "Popular Cat Breeds";
pub const FACTS_HEADING: &str = "Interesting Cat Facts";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breed_list_is_complete_and_ordered() {
        assert_eq!(CAT_BREEDS.len(), 5);
        let names: Vec<&str> = CAT_BREEDS.iter().map(|b| b.name).collect();
        assert_eq!(
            names,
            ["Siamese", "Maine Coon", "Persian", "Bengal", "Sphynx"]
        );
        for breed in CAT_BREEDS {
            assert!(!breed.description.is_empty(), "{} lacks a description", breed.name);
        }
    }

    #[test]
    fn fact_list_is_complete() {
        assert_eq!(CAT_FACTS.len(), 5);
        assert_eq!(CAT_FACTS[0], "Cats sleep for about 70% of their lives.");
        assert!(CAT_FACTS.iter().all(|f| !f.is_empty()));
    }

    #[test]
    fn image_urls_are_absolute() {
        assert_eq!(CAT_IMAGES.len(), 4);
        for url in CAT_IMAGES {
            assert!(url.starts_with("https://"), "not an https URL: {url}");
        }
    }
}
