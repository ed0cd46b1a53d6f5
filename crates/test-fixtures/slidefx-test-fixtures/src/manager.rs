use std::cell::RefCell;
use std::rc::Rc;

use slidefx_api_core::{Shape, ShapeId, ShapeManager, ShapeRef};

use crate::shape::TestShape;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ManagerEvent {
    EnterAnimationMode(ShapeId),
    LeaveAnimationMode(ShapeId),
    ShapeUpdate(ShapeId),
}

/// Shape manager that records every call. A repaint request marks the
/// registered [`TestShape`] as painted, like a real render pass would.
#[derive(Debug, Default)]
pub struct RecordingShapeManager {
    events: RefCell<Vec<ManagerEvent>>,
    shapes: RefCell<Vec<Rc<TestShape>>>,
}

impl RecordingShapeManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_shape(&self, shape: Rc<TestShape>) {
        self.shapes.borrow_mut().push(shape);
    }

    pub fn events(&self) -> Vec<ManagerEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn update_count(&self, id: ShapeId) -> usize {
        self.count(ManagerEvent::ShapeUpdate(id))
    }

    pub fn count(&self, event: ManagerEvent) -> usize {
        self.events.borrow().iter().filter(|e| **e == event).count()
    }

    /// Shapes currently inside animation mode.
    pub fn animated_shapes(&self) -> Vec<ShapeId> {
        let mut inside = Vec::new();
        for event in self.events.borrow().iter() {
            match event {
                ManagerEvent::EnterAnimationMode(id) => inside.push(*id),
                ManagerEvent::LeaveAnimationMode(id) => {
                    if let Some(pos) = inside.iter().position(|s| s == id) {
                        inside.remove(pos);
                    }
                }
                ManagerEvent::ShapeUpdate(_) => {}
            }
        }
        inside
    }
}

impl ShapeManager for RecordingShapeManager {
    fn enter_animation_mode(&self, shape: &ShapeRef) {
        self.events
            .borrow_mut()
            .push(ManagerEvent::EnterAnimationMode(shape.id()));
    }

    fn leave_animation_mode(&self, shape: &ShapeRef) {
        self.events
            .borrow_mut()
            .push(ManagerEvent::LeaveAnimationMode(shape.id()));
    }

    fn notify_shape_update(&self, shape: &ShapeRef) {
        let id = shape.id();
        self.events.borrow_mut().push(ManagerEvent::ShapeUpdate(id));
        if let Some(known) = self.shapes.borrow().iter().find(|s| s.id() == id) {
            known.mark_painted();
        }
    }

    fn shapes(&self) -> Vec<ShapeRef> {
        self.shapes
            .borrow()
            .iter()
            .map(|s| s.clone() as ShapeRef)
            .collect()
    }
}
