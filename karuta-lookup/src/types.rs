use serde::Deserialize;

/// One image the lookup believes shows the requested character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    pub image_url: String,
    pub display_name: String,
    pub favorites: u64,
}

// -- Jikan response types --

#[derive(Debug, Deserialize)]
pub struct CharacterSearchResponse {
    #[serde(default)]
    pub data: Vec<CharacterEntry>,
}

#[derive(Debug, Deserialize)]
pub struct CharacterEntry {
    #[serde(default)]
    pub mal_id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nicknames: Vec<String>,
    #[serde(default)]
    pub favorites: u64,
    #[serde(default)]
    pub images: CharacterImages,
}

#[derive(Debug, Default, Deserialize)]
pub struct CharacterImages {
    #[serde(default)]
    pub jpg: Option<ImageSet>,
    #[serde(default)]
    pub webp: Option<ImageSet>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ImageSet {
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CharacterEntry {
    /// Preferred image URL: jpg first, then webp.
    pub fn image_url(&self) -> Option<&str> {
        [&self.images.jpg, &self.images.webp]
            .into_iter()
            .flatten()
            .filter_map(|set| set.image_url.as_deref())
            .find(|url| !url.is_empty())
    }

    /// Whether this entry names `wanted` exactly. Jikan lists names as
    /// "Family, Given", so both orders count.
    pub fn is_exact_match(&self, wanted: &str) -> bool {
        let wanted = normalize_name(wanted);
        if wanted.is_empty() {
            return false;
        }
        let name = normalize_name(&self.name);
        if name == wanted {
            return true;
        }
        if let Some((family, given)) = self.name.split_once(',') {
            let swapped = normalize_name(&format!("{} {}", given, family));
            if swapped == wanted {
                return true;
            }
        }
        self.nicknames.iter().any(|nick| normalize_name(nick) == wanted)
    }
}

fn normalize_name(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
