//! The PokeAPI resource table.
//!
//! Every resource kind follows the same three request shapes:
//!
//! | Shape | Path |
//! |-------|------|
//! | list | `/<resource>?limit=<N>&offset=<M>` |
//! | by id | `/<resource>/<id>` |
//! | by name | `/<resource>/<name>` |
//!
//! A handful of resources are addressable by id only. The one extra shape is
//! `/pokemon/<id-or-name>/encounters`.
//!
//! The table below is the single source for both the [`Resource`] enum and the
//! per-resource accessor methods on [`PokeApi`](crate::PokeApi). A resource
//! supports name lookup exactly when its entry lists a `name:` accessor.

mod lookup;
mod pagination;

pub use lookup::Lookup;
pub use pagination::{DEFAULT_LIMIT, Pagination};

use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::error::ConfigError;

macro_rules! resource_table {
    (@has_name) => { false };
    (@has_name $by_name:ident) => { true };
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $segment:literal {
                list: $list:ident,
                id: $by_id:ident
                $(, name: $by_name:ident)?
            }
        )*
    ) => {
        /// A resource kind exposed by the PokeAPI.
        ///
        /// `Display` and `FromStr` use the URL path segment (`"egg-group"`,
        /// `"pokemon-species"`, ...).
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            Display,
            EnumCount,
            EnumIter,
            EnumString,
            IntoStaticStr,
        )]
        pub enum Resource {
            $(
                $(#[$meta])*
                #[strum(serialize = $segment)]
                $variant,
            )*
        }

        impl Resource {
            /// Returns the URL path segment for this resource.
            pub fn segment(self) -> &'static str {
                match self {
                    $( Self::$variant => $segment, )*
                }
            }

            /// Returns `true` if this resource can be fetched by name.
            pub fn has_name_lookup(self) -> bool {
                match self {
                    $( Self::$variant => resource_table!(@has_name $($by_name)?), )*
                }
            }
        }

        impl crate::api::PokeApi {
            $(
                #[doc = concat!("Lists `", $segment, "` resources: `GET /", $segment, "?limit={limit}&offset={offset}`.")]
                pub async fn $list(&self, limit: u32, offset: u32) -> crate::ApiResponse {
                    self.list(Resource::$variant, Pagination::new(limit, offset)).await
                }

                #[doc = concat!("Fetches one `", $segment, "` by id: `GET /", $segment, "/{id}`.")]
                pub async fn $by_id(&self, id: u32) -> crate::ApiResponse {
                    self.by_id(Resource::$variant, id).await
                }

                $(
                    #[doc = concat!("Fetches one `", $segment, "` by name: `GET /", $segment, "/{name}`.")]
                    pub async fn $by_name(&self, name: &str) -> crate::ApiResponse {
                        self.by_name(Resource::$variant, name).await
                    }
                )?
            )*
        }
    };
}

resource_table! {
    // Berries
    Berry => "berry" { list: berry_list, id: berry_by_id, name: berry_by_name }
    BerryFirmness => "berry-firmness" {
        list: berry_firmness_list, id: berry_firmness_by_id, name: berry_firmness_by_name
    }
    BerryFlavor => "berry-flavor" {
        list: berry_flavor_list, id: berry_flavor_by_id, name: berry_flavor_by_name
    }

    // Contests
    ContestType => "contest-type" {
        list: contest_type_list, id: contest_type_by_id, name: contest_type_by_name
    }
    ContestEffect => "contest-effect" { list: contest_effect_list, id: contest_effect_by_id }
    SuperContestEffect => "super-contest-effect" {
        list: super_contest_effect_list, id: super_contest_effect_by_id
    }

    // Encounters
    EncounterMethod => "encounter-method" {
        list: encounter_method_list, id: encounter_method_by_id, name: encounter_method_by_name
    }
    EncounterCondition => "encounter-condition" {
        list: encounter_condition_list,
        id: encounter_condition_by_id,
        name: encounter_condition_by_name
    }
    EncounterConditionValue => "encounter-condition-value" {
        list: encounter_condition_value_list,
        id: encounter_condition_value_by_id,
        name: encounter_condition_value_by_name
    }

    // Evolution
    /// Evolution chains have no name of their own.
    EvolutionChain => "evolution-chain" { list: evolution_chain_list, id: evolution_chain_by_id }
    EvolutionTrigger => "evolution-trigger" {
        list: evolution_trigger_list, id: evolution_trigger_by_id, name: evolution_trigger_by_name
    }

    // Games
    Generation => "generation" {
        list: generation_list, id: generation_by_id, name: generation_by_name
    }
    Pokedex => "pokedex" { list: pokedex_list, id: pokedex_by_id, name: pokedex_by_name }
    Version => "version" { list: version_list, id: version_by_id, name: version_by_name }
    VersionGroup => "version-group" {
        list: version_group_list, id: version_group_by_id, name: version_group_by_name
    }

    // Items
    Item => "item" { list: item_list, id: item_by_id, name: item_by_name }
    ItemAttribute => "item-attribute" {
        list: item_attribute_list, id: item_attribute_by_id, name: item_attribute_by_name
    }
    ItemCategory => "item-category" {
        list: item_category_list, id: item_category_by_id, name: item_category_by_name
    }
    ItemFlingEffect => "item-fling-effect" {
        list: item_fling_effect_list, id: item_fling_effect_by_id, name: item_fling_effect_by_name
    }
    ItemPocket => "item-pocket" {
        list: item_pocket_list, id: item_pocket_by_id, name: item_pocket_by_name
    }

    // Locations
    Location => "location" { list: location_list, id: location_by_id, name: location_by_name }
    LocationArea => "location-area" {
        list: location_area_list, id: location_area_by_id, name: location_area_by_name
    }
    PalParkArea => "pal-park-area" {
        list: pal_park_area_list, id: pal_park_area_by_id, name: pal_park_area_by_name
    }
    Region => "region" { list: region_list, id: region_by_id, name: region_by_name }

    // Machines
    /// Machines are keyed by id only; the same TM number differs per version group.
    Machine => "machine" { list: machine_list, id: machine_by_id }

    // Moves
    Move => "move" { list: move_list, id: move_by_id, name: move_by_name }
    MoveAilment => "move-ailment" {
        list: move_ailment_list, id: move_ailment_by_id, name: move_ailment_by_name
    }
    MoveBattleStyle => "move-battle-style" {
        list: move_battle_style_list, id: move_battle_style_by_id, name: move_battle_style_by_name
    }
    MoveCategory => "move-category" {
        list: move_category_list, id: move_category_by_id, name: move_category_by_name
    }
    MoveDamageClass => "move-damage-class" {
        list: move_damage_class_list, id: move_damage_class_by_id, name: move_damage_class_by_name
    }
    MoveLearnMethod => "move-learn-method" {
        list: move_learn_method_list, id: move_learn_method_by_id, name: move_learn_method_by_name
    }
    MoveTarget => "move-target" {
        list: move_target_list, id: move_target_by_id, name: move_target_by_name
    }

    // Pokémon
    Ability => "ability" { list: ability_list, id: ability_by_id, name: ability_by_name }
    Characteristic => "characteristic" { list: characteristic_list, id: characteristic_by_id }
    EggGroup => "egg-group" {
        list: egg_group_list, id: egg_group_by_id, name: egg_group_by_name
    }
    Gender => "gender" { list: gender_list, id: gender_by_id, name: gender_by_name }
    GrowthRate => "growth-rate" {
        list: growth_rate_list, id: growth_rate_by_id, name: growth_rate_by_name
    }
    Nature => "nature" { list: nature_list, id: nature_by_id, name: nature_by_name }
    PokeathlonStat => "pokeathlon-stat" {
        list: pokeathlon_stat_list, id: pokeathlon_stat_by_id, name: pokeathlon_stat_by_name
    }
    Pokemon => "pokemon" { list: pokemon_list, id: pokemon_by_id, name: pokemon_by_name }
    PokemonColor => "pokemon-color" {
        list: pokemon_color_list, id: pokemon_color_by_id, name: pokemon_color_by_name
    }
    PokemonForm => "pokemon-form" {
        list: pokemon_form_list, id: pokemon_form_by_id, name: pokemon_form_by_name
    }
    PokemonHabitat => "pokemon-habitat" {
        list: pokemon_habitat_list, id: pokemon_habitat_by_id, name: pokemon_habitat_by_name
    }
    PokemonShape => "pokemon-shape" {
        list: pokemon_shape_list, id: pokemon_shape_by_id, name: pokemon_shape_by_name
    }
    PokemonSpecies => "pokemon-species" {
        list: pokemon_species_list, id: pokemon_species_by_id, name: pokemon_species_by_name
    }
    Stat => "stat" { list: stat_list, id: stat_by_id, name: stat_by_name }
    Type => "type" { list: type_list, id: type_by_id, name: type_by_name }

    // Utility
    Language => "language" { list: language_list, id: language_by_id, name: language_by_name }
}

impl Resource {
    /// Path for a paginated listing.
    pub fn list_path(self, page: Pagination) -> String {
        format!("/{}{}", self.segment(), page.query())
    }

    /// Path for a single resource by numeric id.
    pub fn id_path(self, id: u32) -> String {
        format!("/{}/{id}", self.segment())
    }

    /// Path for a single resource by name.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::NameLookupUnsupported`] for id-only resources.
    pub fn name_path(self, name: &str) -> Result<String, ConfigError> {
        if !self.has_name_lookup() {
            return Err(ConfigError::NameLookupUnsupported { resource: self });
        }
        Ok(format!("/{}/{name}", self.segment()))
    }

    /// Path for a single resource by id or name.
    pub fn lookup_path(self, lookup: &Lookup) -> Result<String, ConfigError> {
        match lookup {
            Lookup::Id(id) => Ok(self.id_path(*id)),
            Lookup::Name(name) => self.name_path(name),
        }
    }

    /// Iterates over the resources that can only be fetched by id.
    pub fn id_only() -> impl Iterator<Item = Resource> {
        Self::iter().filter(|r| !r.has_name_lookup())
    }
}

/// Path for the location areas where a Pokémon can be encountered.
pub fn encounters_path(pokemon: &Lookup) -> String {
    format!("/{}/{pokemon}/encounters", Resource::Pokemon.segment())
}
