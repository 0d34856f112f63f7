// src/ecs/world.rs

use log::warn;

use crate::components::card::Card;
use crate::ecs::entity::Entity;

/// ゲームに登場する全カードの実体をまとめて持つ「世界」だよ🌍
///
/// カードは作られた順に `Vec` に並ぶので、`Entity(i)` はそのまま `cards[i]` を指す。
/// ゲーム中にカードが削除されることはないから、ID が無効になることもないよ。
/// 山札・場札などのスタックは `Entity` だけを持って、
/// 表向き/裏向きの切り替えはここ (`get_card_mut`) を通して行うんだ。
#[derive(Debug, Default, Clone)]
pub struct World {
    cards: Vec<Card>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// カードを World に登録して、新しい Entity を返すよ。
    pub fn spawn_card(&mut self, card: Card) -> Entity {
        let entity = Entity(self.cards.len());
        self.cards.push(card);
        entity
    }

    pub fn get_card(&self, entity: Entity) -> Option<&Card> {
        self.cards.get(entity.index())
    }

    pub fn get_card_mut(&mut self, entity: Entity) -> Option<&mut Card> {
        self.cards.get_mut(entity.index())
    }

    /// 表向きにする。存在しない Entity だったら警告だけ出して何もしない。
    pub fn turn_up(&mut self, entity: Entity) {
        match self.get_card_mut(entity) {
            Some(card) => card.turn_up(),
            None => warn!("World: turn_up on unknown entity {:?}", entity),
        }
    }

    /// 裏向きにする。
    pub fn turn_down(&mut self, entity: Entity) {
        match self.get_card_mut(entity) {
            Some(card) => card.turn_down(),
            None => warn!("World: turn_down on unknown entity {:?}", entity),
        }
    }

    /// Entity が表向きのカードを指しているか。見つからなければ false。
    pub fn is_face_up(&self, entity: Entity) -> bool {
        self.get_card(entity).map_or(false, Card::is_face_up)
    }

    /// 登録されている全 Entity (作成順)。
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        (0..self.cards.len()).map(Entity)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
#[path = "world_tests.rs"]
mod tests;
